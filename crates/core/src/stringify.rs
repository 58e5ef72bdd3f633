//! Generic object-to-label conversion
//!
//! [`stringify`] turns any [`Object`] into the single human-readable label
//! an admin list or breadcrumb shows for it. First match wins:
//!
//! 1. [`Describe`](crate::record::Describe) capability: its output, verbatim
//! 2. First existing field among [`DISPLAY_FIELDS`] (`Name`, `Title`, `Code`),
//!    reduced through [`DbValue`](crate::record::DbValue) when available
//! 3. Primary key: `""` when zero, otherwise `Model#key` (e.g. `Order#42`)
//! 4. The raw value, formatted directly
//!
//! The only fallible step is the primitive reduction in (2); a failure is
//! logged and the field is formatted directly instead.

use std::fmt;

use tracing::debug;

use crate::record::{Object, Record};

/// Field names consulted for a display label, in priority order
pub const DISPLAY_FIELDS: [&str; 3] = ["Name", "Title", "Code"];

/// Separator between model name and primary key in fallback labels
pub const PRIMARY_KEY_SEPARATOR: char = '#';

/// Produce the display label for `object`
///
/// Deterministic and pure: never mutates the object and never fails.
pub fn stringify<O: Object + ?Sized>(object: &O) -> String {
    if let Some(describe) = object.as_describe() {
        return describe.describe();
    }

    if let Some(record) = object.as_record() {
        if let Some(label) = display_field_label(record) {
            return label;
        }

        if let Some(pk) = record.primary_key() {
            if record.is_primary_key_zero() {
                return String::new();
            }
            return format!("{}{}{}", record.model_name(), PRIMARY_KEY_SEPARATOR, pk);
        }
    }

    Raw(object).to_string()
}

/// Label from the first display field the record has, if any
///
/// Only the first existing field is consulted, even when its text is empty.
fn display_field_label(record: &dyn Record) -> Option<String> {
    let (name, field) = DISPLAY_FIELDS
        .iter()
        .find_map(|name| record.field(name).map(|field| (*name, field)))?;

    if let Some(valuer) = field.as_db_value() {
        match valuer.db_value() {
            Ok(value) => return Some(value.to_string()),
            Err(e) => {
                debug!(
                    target: "adminkit::stringify",
                    model = record.model_name(),
                    field = name,
                    error = %e,
                    "Value reduction failed, formatting field directly"
                );
            }
        }
    }

    Some(field.to_string())
}

struct Raw<'a, O: ?Sized>(&'a O);

impl<O: Object + ?Sized> fmt::Display for Raw<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_raw(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::record::{DbValue, Describe, Field};
    use crate::row::Row;
    use crate::value::Value;
    use std::sync::Arc;

    #[derive(Debug)]
    struct Secret(&'static str);

    impl DbValue for Secret {
        fn db_value(&self) -> Result<Value> {
            Err(Error::reduction("sealed"))
        }
    }

    impl Field for Secret {
        fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "<{}>", self.0)
        }

        fn is_zero(&self) -> bool {
            self.0.is_empty()
        }

        fn as_db_value(&self) -> Option<&dyn DbValue> {
            Some(self)
        }
    }

    #[derive(Debug)]
    struct Upper(&'static str);

    impl DbValue for Upper {
        fn db_value(&self) -> Result<Value> {
            Ok(Value::from(self.0.to_uppercase()))
        }
    }

    impl Field for Upper {
        fn fmt_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }

        fn is_zero(&self) -> bool {
            self.0.is_empty()
        }

        fn as_db_value(&self) -> Option<&dyn DbValue> {
            Some(self)
        }
    }

    #[derive(Debug)]
    struct Vault {
        id: u64,
        code: Secret,
    }

    impl Record for Vault {
        fn model_name(&self) -> &str {
            "Vault"
        }

        fn field(&self, name: &str) -> Option<&dyn Field> {
            match name {
                "Code" => Some(&self.code),
                "ID" => Some(&self.id),
                _ => None,
            }
        }

        fn primary_key(&self) -> Option<&dyn Field> {
            Some(&self.id)
        }
    }

    impl Object for Vault {
        fn as_record(&self) -> Option<&dyn Record> {
            Some(self)
        }
    }

    #[derive(Debug)]
    struct Sku {
        title: Upper,
    }

    impl Record for Sku {
        fn model_name(&self) -> &str {
            "Sku"
        }

        fn field(&self, name: &str) -> Option<&dyn Field> {
            (name == "Title").then_some(&self.title as &dyn Field)
        }

        fn primary_key(&self) -> Option<&dyn Field> {
            None
        }
    }

    impl Object for Sku {
        fn as_record(&self) -> Option<&dyn Record> {
            Some(self)
        }
    }

    #[derive(Debug)]
    struct Labelled(Row);

    impl Describe for Labelled {
        fn describe(&self) -> String {
            "custom label".to_string()
        }
    }

    impl Object for Labelled {
        fn as_describe(&self) -> Option<&dyn Describe> {
            Some(self)
        }

        fn as_record(&self) -> Option<&dyn Record> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_describe_wins_over_fields() {
        let labelled = Labelled(Row::new("Order").with_field("Name", "Acme"));
        assert_eq!(stringify(&labelled), "custom label");
    }

    #[test]
    fn test_name_wins_over_title() {
        let row = Row::new("Company")
            .with_field("Title", "Ltd")
            .with_field("Name", "Acme");
        assert_eq!(stringify(&row), "Acme");
    }

    #[test]
    fn test_title_then_code() {
        let row = Row::new("Product")
            .with_field("Code", "P-1")
            .with_field("Title", "Widget");
        assert_eq!(stringify(&row), "Widget");

        let row = Row::new("Product").with_field("Code", "P-1");
        assert_eq!(stringify(&row), "P-1");
    }

    #[test]
    fn test_empty_first_field_stops_scan() {
        let row = Row::new("Company")
            .with_field("Name", "")
            .with_field("Title", "Ltd")
            .with_primary_key("ID", 9i64);
        assert_eq!(stringify(&row), "");
    }

    #[test]
    fn test_db_value_reduction_is_preferred() {
        let sku = Sku {
            title: Upper("widget"),
        };
        assert_eq!(stringify(&sku), "WIDGET");
    }

    #[test]
    fn test_failed_reduction_formats_field_directly() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();

        let vault = Vault {
            id: 3,
            code: Secret("v-3"),
        };
        assert_eq!(stringify(&vault), "<v-3>");
    }

    #[test]
    fn test_primary_key_fallback() {
        let row = Row::new("Order").with_primary_key("ID", 42i64);
        assert_eq!(stringify(&row), "Order#42");
    }

    #[test]
    fn test_zero_primary_key_is_empty() {
        let row = Row::new("Order")
            .with_primary_key("ID", 0i64)
            .with_field("Note", "draft");
        assert_eq!(stringify(&row), "");
    }

    #[test]
    fn test_record_without_primary_key_formats_raw() {
        let row = Row::new("Note").with_field("Body", "hi");
        assert_eq!(stringify(&row), "Note{Body: hi}");
    }

    #[test]
    fn test_scalars_format_raw() {
        assert_eq!(stringify(&42i64), "42");
        assert_eq!(stringify("plain"), "plain");
        assert_eq!(stringify(&Value::Null), "null");
        assert_eq!(stringify(&vec![1, 2]), "[1, 2]");
    }

    #[test]
    fn test_pointer_layer_is_transparent() {
        let row = Arc::new(Row::new("Order").with_primary_key("ID", 7i64));
        assert_eq!(stringify(&row), "Order#7");
        assert_eq!(stringify(&Box::new(Some(5u8))), "5");
        assert_eq!(stringify(&None::<u8>), "null");
    }

    #[test]
    fn test_dyn_object() {
        let objects: Vec<Box<dyn Object>> = vec![
            Box::new(Row::new("Order").with_primary_key("ID", 1i64)),
            Box::new(String::from("loose")),
        ];
        let labels: Vec<String> = objects.iter().map(stringify).collect();
        assert_eq!(labels, vec!["Order#1", "loose"]);
    }
}
