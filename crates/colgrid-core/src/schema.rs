//! Object schema types and the schema index.
//!
//! - [`FieldMetadata`]: label, data type and API name of one field
//! - [`ObjectSchema`]: the field-metadata mapping of one object type, as a
//!   schema provider returns it
//! - [`SchemaIndex`]: read-only lookup from field name to metadata

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Static description of one field of an object type.
///
/// Deserializes from the provider's `{ apiName, label, dataType }` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
    /// API name of the field. May differ in casing from the index key.
    pub api_name: String,

    /// Human-readable label.
    pub label: String,

    /// Platform data type name (e.g. `"String"`, `"Currency"`).
    pub data_type: String,
}

impl FieldMetadata {
    /// Creates field metadata.
    #[must_use]
    pub fn new(
        api_name: impl Into<String>,
        label: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self {
            api_name: api_name.into(),
            label: label.into(),
            data_type: data_type.into(),
        }
    }
}

/// Schema description of a single object type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSchema {
    /// API name of the object type (e.g. `"Account"`).
    pub api_name: String,

    /// Field name to field metadata. Missing in the payload means no fields.
    #[serde(default)]
    pub fields: HashMap<String, FieldMetadata>,
}

impl ObjectSchema {
    /// Creates an object schema with no fields.
    #[must_use]
    pub fn new(api_name: impl Into<String>) -> Self {
        Self {
            api_name: api_name.into(),
            fields: HashMap::new(),
        }
    }

    /// Adds a field keyed by its API name.
    #[must_use]
    pub fn with_field(mut self, field: FieldMetadata) -> Self {
        self.fields.insert(field.api_name.clone(), field);
        self
    }
}

/// Lookup from field name to [`FieldMetadata`].
///
/// Built once per schema fetch and read-only afterward. A name that is not
/// a key is not a describable field of the object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaIndex {
    fields: HashMap<String, FieldMetadata>,
}

impl SchemaIndex {
    /// Builds an index from a raw field-metadata mapping.
    ///
    /// `None` and an empty mapping both yield an empty index.
    #[must_use]
    pub fn build(fields: Option<HashMap<String, FieldMetadata>>) -> Self {
        Self {
            fields: fields.unwrap_or_default(),
        }
    }

    /// Builds an index from an object schema's fields.
    #[must_use]
    pub fn from_schema(schema: &ObjectSchema) -> Self {
        Self::build(Some(schema.fields.clone()))
    }

    /// Returns `true` if `name` is a describable field.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the metadata for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldMetadata> {
        self.fields.get(name)
    }

    /// Number of indexed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the index has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<HashMap<String, FieldMetadata>> for SchemaIndex {
    fn from(fields: HashMap<String, FieldMetadata>) -> Self {
        Self::build(Some(fields))
    }
}

impl FromIterator<(String, FieldMetadata)> for SchemaIndex {
    fn from_iter<I: IntoIterator<Item = (String, FieldMetadata)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
