//! Resolving the record type behind registered resources

use std::collections::VecDeque;
use std::rc::Rc;

use adminkit::{impl_introspect, resolve_model_type, Introspect, Row, TypeDescriptor};

struct Invoice;
struct LineItem;

impl_introspect!(Invoice, LineItem);

#[test]
fn test_resources_resolve_to_record_types() {
    let invoices: Vec<Invoice> = Vec::new();
    let items: VecDeque<Rc<LineItem>> = VecDeque::new();
    let maybe: Option<Box<Invoice>> = None;

    assert_eq!(resolve_model_type(&invoices).name(), Some("Invoice"));
    assert_eq!(resolve_model_type(&items).name(), Some("LineItem"));
    assert_eq!(resolve_model_type(&maybe).name(), Some("Invoice"));
    assert_eq!(resolve_model_type(&vec![Row::new("Any")]).name(), Some("Row"));
}

#[test]
fn test_host_descriptor_for_generic_wrapper() {
    struct Page<T>(Vec<T>);

    impl<T: Introspect> Introspect for Page<T> {
        fn type_descriptor() -> TypeDescriptor {
            TypeDescriptor::sequence(T::type_descriptor())
        }
    }

    let page = Page(vec![Invoice]);
    assert_eq!(page.0.len(), 1);
    assert_eq!(resolve_model_type(&page), TypeDescriptor::named("Invoice"));
}
