//! Loosely-typed record rows.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key carrying a record's identifier.
pub const ID_FIELD: &str = "Id";

/// A single record: field name to arbitrary JSON value.
///
/// Rows in a collection need not share a field set, and a row may carry
/// keys with no schema counterpart (e.g. flattened `Account__r.Name`
/// relationship paths). Key order is preserved as supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordRow {
    values: Map<String, Value>,
}

impl RecordRow {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a JSON value into a row. Returns `None` unless it is an
    /// object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(values) => Some(Self { values }),
            _ => None,
        }
    }

    /// Sets a field, keeping the position of an existing key.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    /// Field names in row order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns the value of `field`, if the row carries it.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Returns `true` if the row carries `field`, even with a null value.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// The row's `Id` when it is a non-empty string.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.values
            .get(ID_FIELD)
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    /// Number of fields on the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Map<String, Value>> for RecordRow {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

/// Returns the id of the first row that carries one.
#[must_use]
pub fn first_record_id(records: &[RecordRow]) -> Option<&str> {
    records.iter().find_map(RecordRow::id)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_key_order_preserved() {
        let row: RecordRow =
            serde_json::from_str(r#"{"Name":"Acme","Id":"001","Industry":null}"#).unwrap();
        let names: Vec<&str> = row.field_names().collect();
        assert_eq!(names, vec!["Name", "Id", "Industry"]);
        assert!(row.contains("Industry"));
        assert_eq!(row.get("Industry"), Some(&Value::Null));
    }

    #[test]
    fn test_builder_and_id() {
        let row = RecordRow::new().with("Id", "001").with("Amount", 12.5);
        assert_eq!(row.id(), Some("001"));
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("Amount"), Some(&json!(12.5)));
    }

    #[test]
    fn test_id_requires_non_empty_string() {
        assert_eq!(RecordRow::new().with("Id", Value::Null).id(), None);
        assert_eq!(RecordRow::new().with("Id", "").id(), None);
        assert_eq!(RecordRow::new().with("Id", 7).id(), None);
        assert_eq!(RecordRow::new().id(), None);
    }

    #[test]
    fn test_from_value() {
        assert!(RecordRow::from_value(json!({"Id": "1"})).is_some());
        assert!(RecordRow::from_value(json!([1, 2])).is_none());
        assert!(RecordRow::from_value(json!("row")).is_none());
    }

    #[test]
    fn test_nested_relationship_value() {
        let row = RecordRow::from_value(json!({
            "Id": "003",
            "Account": {"Name": "Acme"}
        }))
        .unwrap();
        assert!(row.get("Account").unwrap().is_object());
    }

    #[test]
    fn test_first_record_id() {
        let rows = vec![
            RecordRow::new().with("Name", "no id"),
            RecordRow::new().with("Id", "002"),
            RecordRow::new().with("Id", "003"),
        ];
        assert_eq!(first_record_id(&rows), Some("002"));
        assert_eq!(first_record_id(&[]), None);
    }
}
