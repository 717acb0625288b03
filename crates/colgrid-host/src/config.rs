//! Component configuration.
//!
//! [`TableConfig`] mirrors the design properties a page author sets on the
//! table. Field lists arrive as comma-delimited strings and are parsed into
//! ordered, de-duplicated name lists.

use std::collections::HashSet;

use colgrid_core::{parse_field_list, EngineConfig};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::HostResult;

/// Delimiter for field-list properties.
pub const FIELD_LIST_DELIMITER: char = ',';

/// Initial sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Configuration for a collection table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    /// Table title.
    pub title: Option<String>,

    /// Append the record count to the title.
    pub show_record_count: bool,

    /// Row selection checkbox style, passed through to the renderer.
    pub checkbox_type: Option<String>,

    /// Explicit column allow-list. Empty means infer from the records.
    #[serde(deserialize_with = "field_list")]
    pub shown_fields: Vec<String>,

    /// Fields the renderer may offer for editing.
    #[serde(deserialize_with = "field_list")]
    pub editable_fields: Vec<String>,

    /// Fields the renderer may offer for sorting.
    #[serde(deserialize_with = "field_list")]
    pub sortable_fields: Vec<String>,

    /// Field the renderer initially sorts by.
    pub sorted_by: Option<String>,

    /// Initial sort direction.
    pub sorted_direction: Option<SortDirection>,

    /// Object type of a pre-typed record collection. When set, no
    /// single-record lookup is made.
    pub object_api_name: Option<String>,

    /// Column inference settings.
    pub engine: EngineConfig,
}

impl TableConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON component properties.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`](crate::HostError::Config) if the JSON
    /// is malformed or a property has the wrong type.
    pub fn from_json(json: &str) -> HostResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables the record count suffix on the title.
    #[must_use]
    pub fn with_record_count(mut self) -> Self {
        self.show_record_count = true;
        self
    }

    /// Sets the explicit column allow-list from a delimited string.
    #[must_use]
    pub fn with_shown_fields(mut self, fields: &str) -> Self {
        self.shown_fields = parse_field_list(fields, FIELD_LIST_DELIMITER);
        self
    }

    /// Declares the record collection's object type.
    #[must_use]
    pub fn with_object_api_name(mut self, name: impl Into<String>) -> Self {
        self.object_api_name = Some(name.into());
        self
    }

    /// Sets the engine configuration.
    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// The explicit allow-list, or `None` when columns are inferred.
    #[must_use]
    pub fn explicit_fields(&self) -> Option<&[String]> {
        if self.shown_fields.is_empty() {
            None
        } else {
            Some(&self.shown_fields)
        }
    }

    /// Title to display, with ` (N)` appended when the record count is
    /// shown.
    #[must_use]
    pub fn display_title(&self, record_count: usize) -> Option<String> {
        let title = self.title.as_ref()?;
        if self.show_record_count {
            Some(format!("{title} ({record_count})"))
        } else {
            Some(title.clone())
        }
    }
}

/// Accepts either a delimited string or a JSON array of names.
fn field_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Delimited(String),
        List(Vec<String>),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Raw::Delimited(value)) => parse_field_list(&value, FIELD_LIST_DELIMITER),
        Some(Raw::List(names)) => {
            let mut seen = HashSet::new();
            names
                .into_iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty() && seen.insert(name.clone()))
                .collect()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_infers_columns() {
        let cfg = TableConfig::new();
        assert!(cfg.explicit_fields().is_none());
        assert_eq!(cfg.engine.initial_width, 200);
    }

    #[test]
    fn test_from_json_properties() {
        let cfg = TableConfig::from_json(
            r#"{
                "title": "Accounts",
                "showRecordCount": true,
                "checkboxType": "Multi",
                "shownFields": "Name, Phone ,,Name",
                "sortableFields": ["Name", " Phone", "Name"],
                "sortedBy": "Name",
                "sortedDirection": "desc",
                "engine": {"initialWidth": 160}
            }"#,
        )
        .unwrap();

        let shown = vec!["Name".to_string(), "Phone".to_string()];
        assert_eq!(cfg.explicit_fields(), Some(shown.as_slice()));
        assert_eq!(cfg.sortable_fields, vec!["Name", "Phone"]);
        assert!(cfg.editable_fields.is_empty());
        assert_eq!(cfg.sorted_direction, Some(SortDirection::Desc));
        assert_eq!(cfg.checkbox_type.as_deref(), Some("Multi"));
        assert_eq!(cfg.engine.initial_width, 160);
    }

    #[test]
    fn test_null_field_list() {
        let cfg = TableConfig::from_json(r#"{"shownFields": null}"#).unwrap();
        assert!(cfg.shown_fields.is_empty());
    }

    #[test]
    fn test_from_json_rejects_bad_type() {
        let err = TableConfig::from_json(r#"{"showRecordCount": "yes"}"#).unwrap_err();
        assert!(matches!(err, crate::HostError::Config(_)));
    }

    #[test]
    fn test_display_title() {
        let cfg = TableConfig::new().with_title("Contacts");
        assert_eq!(cfg.display_title(3).as_deref(), Some("Contacts"));

        let cfg = cfg.with_record_count();
        assert_eq!(cfg.display_title(3).as_deref(), Some("Contacts (3)"));

        assert_eq!(TableConfig::new().display_title(3), None);
    }

    #[test]
    fn test_record_count_without_title() {
        let cfg = TableConfig::new().with_record_count();
        assert_eq!(cfg.display_title(3), None);
    }

    #[test]
    fn test_builder() {
        let cfg = TableConfig::new()
            .with_shown_fields("Id,Name")
            .with_object_api_name("Account");
        assert_eq!(cfg.shown_fields, vec!["Id", "Name"]);
        assert_eq!(cfg.object_api_name.as_deref(), Some("Account"));
    }
}
