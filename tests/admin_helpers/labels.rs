//! Labels for index rows and breadcrumbs

use std::fmt;

use adminkit::{stringify, Describe, Field, Object, Record, Row, Value};

#[derive(Debug)]
struct Category {
    id: i64,
    title: String,
}

impl Record for Category {
    fn model_name(&self) -> &str {
        "Category"
    }

    fn field(&self, name: &str) -> Option<&dyn Field> {
        match name {
            "ID" => Some(&self.id),
            "Title" => Some(&self.title),
            _ => None,
        }
    }

    fn primary_key(&self) -> Option<&dyn Field> {
        Some(&self.id)
    }
}

impl Object for Category {
    fn as_record(&self) -> Option<&dyn Record> {
        Some(self)
    }
}

#[derive(Debug)]
struct Money {
    cents: i64,
}

impl Describe for Money {
    fn describe(&self) -> String {
        format!("${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Object for Money {
    fn as_describe(&self) -> Option<&dyn Describe> {
        Some(self)
    }

    fn fmt_raw(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cents)
    }
}

#[test]
fn test_index_page_labels() {
    let rows: Vec<Box<dyn Object>> = vec![
        Box::new(Category {
            id: 1,
            title: "Shoes".to_string(),
        }),
        Box::new(Row::new("Order").with_primary_key("ID", 42i64)),
        Box::new(Row::new("Order").with_primary_key("ID", 0i64)),
        Box::new(Row::new("Tag").with_field("Name", "sale").with_field("Code", "S")),
        Box::new(Money { cents: 1999 }),
        Box::new(Value::Int(7)),
    ];

    let labels: Vec<String> = rows.iter().map(stringify).collect();
    assert_eq!(labels, vec!["Shoes", "Order#42", "", "sale", "$19.99", "7"]);
}

#[test]
fn test_string_primary_key() {
    let row = Row::new("Country").with_primary_key("Iso", "NZ");
    assert_eq!(stringify(&row), "Country#NZ");

    let unsaved = Row::new("Country").with_primary_key("Iso", "");
    assert_eq!(stringify(&unsaved), "");
}

#[test]
fn test_null_display_field() {
    let row = Row::new("Person")
        .with_field("Name", Value::Null)
        .with_primary_key("ID", 3i64);
    assert_eq!(stringify(&row), "null");
}
