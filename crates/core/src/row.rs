//! Dynamic record type
//!
//! [`Row`] is a record assembled at runtime: a model name, an ordered list of
//! named [`Value`] fields, and optionally the name of the primary-key field.
//! Hosts that load rows without a static Rust type (JSON APIs, ad-hoc SQL)
//! can hand a `Row` to the stringifier directly.

use std::fmt;

use crate::record::{Field, Object, Record};
use crate::value::Value;

/// A record built at runtime
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    model: String,
    fields: Vec<(String, Value)>,
    primary_key: Option<String>,
}

impl Row {
    /// Create an empty row for the given model name
    pub fn new(model: impl Into<String>) -> Self {
        Row {
            model: model.into(),
            fields: Vec::new(),
            primary_key: None,
        }
    }

    /// Add or replace a field (builder pattern)
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Add or replace the primary-key field and mark it as such (builder pattern)
    pub fn with_primary_key(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        self.set(name.clone(), value);
        self.primary_key = Some(name);
        self
    }

    /// Build a row from a JSON object, one field per member
    ///
    /// `primary_key` is designated only when the object has that member.
    /// Nested arrays and objects are kept as their JSON text.
    pub fn from_json_object(
        model: impl Into<String>,
        object: serde_json::Map<String, serde_json::Value>,
        primary_key: Option<&str>,
    ) -> Self {
        let mut row = Row::new(model);
        for (name, value) in object {
            row.fields.push((name, Value::from(value)));
        }
        row.primary_key = primary_key
            .filter(|name| row.get(name).is_some())
            .map(str::to_string);
        row
    }

    /// Set a field, replacing any existing value under the same name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Get a field value by exact name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// The model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Name of the primary-key field, if one is designated
    pub fn primary_key_name(&self) -> Option<&str> {
        self.primary_key.as_deref()
    }

    /// Field names in insertion order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the row has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Record for Row {
    fn model_name(&self) -> &str {
        &self.model
    }

    fn field(&self, name: &str) -> Option<&dyn Field> {
        self.get(name).map(|v| v as &dyn Field)
    }

    fn primary_key(&self) -> Option<&dyn Field> {
        self.primary_key.as_deref().and_then(|name| self.field(name))
    }
}

impl Object for Row {
    fn as_record(&self) -> Option<&dyn Record> {
        Some(self)
    }

    /// `Model{a: 1, b: x}`
    fn fmt_raw(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.model)?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_existing_field() {
        let mut row = Row::new("Order").with_field("Name", "old");
        row.set("Name", "new");
        assert_eq!(row.len(), 1);
        assert_eq!(row.get("Name"), Some(&Value::from("new")));
    }

    #[test]
    fn test_field_lookup_is_case_sensitive() {
        let row = Row::new("Order").with_field("Name", "Acme");
        assert!(row.field("Name").is_some());
        assert!(row.field("name").is_none());
        assert!(row.field("NAME").is_none());
    }

    #[test]
    fn test_primary_key() {
        let row = Row::new("Order").with_primary_key("ID", 42i64);
        assert_eq!(row.primary_key_name(), Some("ID"));
        assert_eq!(row.primary_key().unwrap().to_string(), "42");
        assert!(!row.is_primary_key_zero());

        let zero = Row::new("Order").with_primary_key("ID", 0i64);
        assert!(zero.is_primary_key_zero());
    }

    #[test]
    fn test_no_primary_key() {
        let row = Row::new("Note").with_field("Body", "hi");
        assert!(row.primary_key().is_none());
        assert!(row.is_primary_key_zero());
    }

    #[test]
    fn test_field_names_keep_insertion_order() {
        let row = Row::new("Order")
            .with_field("Title", "t")
            .with_primary_key("ID", 1i64)
            .with_field("Code", "c");
        let names: Vec<_> = row.field_names().collect();
        assert_eq!(names, vec!["Title", "ID", "Code"]);
    }

    #[test]
    fn test_from_json_object() {
        let object = match serde_json::json!({"ID": 12, "Name": "Acme", "Tags": ["a"]}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let row = Row::from_json_object("Company", object, Some("ID"));

        assert_eq!(row.primary_key_name(), Some("ID"));
        assert_eq!(row.get("ID").and_then(Value::as_int), Some(12));
        assert_eq!(row.get("Name").and_then(Value::as_str), Some("Acme"));
        assert_eq!(row.get("Tags").and_then(Value::as_str), Some("[\"a\"]"));
        assert_eq!(crate::stringify::stringify(&row), "Acme");
    }

    #[test]
    fn test_from_json_object_missing_primary_key() {
        let row = Row::from_json_object("Note", serde_json::Map::new(), Some("ID"));
        assert!(row.primary_key_name().is_none());
        assert!(row.is_empty());
    }
}
