//! Data-type to render-type mapping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Platform data types and the render-type tokens conventionally used for
/// them by grid renderers.
const STANDARD_DISPLAY_TYPES: &[(&str, &str)] = &[
    ("ADDRESS", "text"),
    ("BOOLEAN", "boolean"),
    ("COMBOBOX", "text"),
    ("CURRENCY", "currency"),
    ("DATE", "date-local"),
    ("DATETIME", "date"),
    ("DOUBLE", "number"),
    ("EMAIL", "email"),
    ("ENCRYPTEDSTRING", "text"),
    ("ID", "text"),
    ("INTEGER", "number"),
    ("LOCATION", "location"),
    ("LONG", "number"),
    ("MULTIPICKLIST", "text"),
    ("PERCENT", "percent"),
    ("PHONE", "phone"),
    ("PICKLIST", "text"),
    ("REFERENCE", "text"),
    ("STRING", "text"),
    ("TEXTAREA", "text"),
    ("TIME", "text"),
    ("URL", "url"),
];

/// Mapping from uppercased data-type name to render-type token.
///
/// Keys are stored as given. [`render_type`](Self::render_type) uppercases
/// its argument, so only uppercase keys are reachable and a schema's data
/// type matches regardless of its casing. The map is static for the duration of an inference; hosts share it
/// behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, String>", into = "HashMap<String, String>")]
pub struct DisplayTypeMap {
    entries: HashMap<String, String>,
}

impl DisplayTypeMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the conventional platform mapping (`STRING` → `text`,
    /// `CURRENCY` → `currency`, ...).
    ///
    /// Never applied implicitly; hosts opt in when no server-side map is
    /// configured.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD_DISPLAY_TYPES.iter().copied().collect()
    }

    /// Adds or replaces a mapping.
    #[must_use]
    pub fn with_entry(mut self, data_type: impl Into<String>, render_type: impl Into<String>) -> Self {
        self.insert(data_type, render_type);
        self
    }

    /// Adds or replaces a mapping in place.
    pub fn insert(&mut self, data_type: impl Into<String>, render_type: impl Into<String>) {
        self.entries.insert(data_type.into(), render_type.into());
    }

    /// Returns the render-type token for `data_type`, if mapped.
    #[must_use]
    pub fn render_type(&self, data_type: &str) -> Option<&str> {
        self.entries
            .get(&data_type.to_uppercase())
            .map(String::as_str)
    }

    /// Number of mapped data types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, String>> for DisplayTypeMap {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl From<DisplayTypeMap> for HashMap<String, String> {
    fn from(map: DisplayTypeMap) -> Self {
        map.entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DisplayTypeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (data_type, render_type) in iter {
            map.insert(data_type, render_type);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_uppercases_data_type() {
        let map = DisplayTypeMap::new().with_entry("STRING", "text");
        assert_eq!(map.render_type("String"), Some("text"));
        assert_eq!(map.render_type("string"), Some("text"));
        assert_eq!(map.render_type("CURRENCY"), None);
    }

    #[test]
    fn test_keys_stored_verbatim() {
        let map: DisplayTypeMap = [("currency", "currency")].into_iter().collect();
        assert_eq!(map.len(), 1);
        assert_eq!(map.render_type("currency"), None);
        assert_eq!(map.render_type("CURRENCY"), None);
    }

    #[test]
    fn test_uppercase_key_wins_over_case_variants() {
        for _ in 0..50 {
            let map: DisplayTypeMap =
                serde_json::from_str(r#"{"String":"richtext","STRING":"text","string":"plain"}"#)
                    .unwrap();
            assert_eq!(map.len(), 3);
            assert_eq!(map.render_type("String"), Some("text"));
            assert_eq!(map.render_type("string"), Some("text"));
        }
    }

    #[test]
    fn test_standard_map() {
        let map = DisplayTypeMap::standard();
        assert_eq!(map.len(), STANDARD_DISPLAY_TYPES.len());
        assert_eq!(map.render_type("Currency"), Some("currency"));
        assert_eq!(map.render_type("Date"), Some("date-local"));
        assert_eq!(map.render_type("reference"), Some("text"));
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let map: DisplayTypeMap =
            serde_json::from_str(r#"{"ID":"text","STRING":"text","PERCENT":"percent"}"#).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.render_type("percent"), Some("percent"));
    }

    #[test]
    fn test_serialize_keeps_keys() {
        let map = DisplayTypeMap::new().with_entry("ID", "text");
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"ID": "text"}));
    }

    #[test]
    fn test_empty() {
        let map = DisplayTypeMap::new();
        assert!(map.is_empty());
        assert_eq!(map.render_type("ID"), None);
    }
}
