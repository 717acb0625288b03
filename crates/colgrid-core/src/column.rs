//! Column descriptors and the column builder.

use serde::{Deserialize, Serialize};

use crate::display_types::DisplayTypeMap;
use crate::error::{InferenceError, InferenceResult};
use crate::schema::SchemaIndex;

/// Initial width, in renderer units, given to every inferred column.
pub const DEFAULT_INITIAL_WIDTH: u32 = 200;

/// One column handed to the rendering sink.
///
/// Serializes to `{ label, fieldName, type, initialWidth }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    /// Column header, taken from the schema label.
    pub label: String,

    /// Field API name from the schema (not the lookup key).
    pub field_name: String,

    /// Render-type token.
    #[serde(rename = "type")]
    pub render_type: String,

    /// Initial column width. Not derived from content.
    pub initial_width: u32,
}

/// Builds column descriptors from a schema index and a display-type map.
///
/// Pure: holds borrowed inputs only.
#[derive(Debug, Clone, Copy)]
pub struct ColumnBuilder<'a> {
    index: &'a SchemaIndex,
    display_types: &'a DisplayTypeMap,
    initial_width: u32,
}

impl<'a> ColumnBuilder<'a> {
    /// Creates a builder using [`DEFAULT_INITIAL_WIDTH`].
    #[must_use]
    pub fn new(index: &'a SchemaIndex, display_types: &'a DisplayTypeMap) -> Self {
        Self {
            index,
            display_types,
            initial_width: DEFAULT_INITIAL_WIDTH,
        }
    }

    /// Overrides the initial width given to every column.
    #[must_use]
    pub fn with_initial_width(mut self, width: u32) -> Self {
        self.initial_width = width;
        self
    }

    /// Builds the descriptor for one field.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::UndescribableField`] if `field_name` is not
    /// in the index, or [`InferenceError::UnmappedDataType`] if its data type
    /// has no render type.
    pub fn build(&self, field_name: &str) -> InferenceResult<ColumnDescriptor> {
        let meta = self
            .index
            .get(field_name)
            .ok_or_else(|| InferenceError::UndescribableField {
                field: field_name.to_string(),
            })?;

        let render_type = self
            .display_types
            .render_type(&meta.data_type)
            .ok_or_else(|| InferenceError::UnmappedDataType {
                field: field_name.to_string(),
                data_type: meta.data_type.clone(),
            })?;

        Ok(ColumnDescriptor {
            label: meta.label.clone(),
            field_name: meta.api_name.clone(),
            render_type: render_type.to_string(),
            initial_width: self.initial_width,
        })
    }

    /// Builds one descriptor per field, in input order.
    ///
    /// # Errors
    ///
    /// Fails on the first field [`build`](Self::build) rejects. No partial
    /// result is returned.
    pub fn build_all<S: AsRef<str>>(
        &self,
        field_names: &[S],
    ) -> InferenceResult<Vec<ColumnDescriptor>> {
        field_names
            .iter()
            .map(|name| self.build(name.as_ref()))
            .collect()
    }
}

/// Builds the descriptor for `field_name` with the default width.
///
/// # Errors
///
/// See [`ColumnBuilder::build`].
pub fn build_column(
    field_name: &str,
    index: &SchemaIndex,
    display_types: &DisplayTypeMap,
) -> InferenceResult<ColumnDescriptor> {
    ColumnBuilder::new(index, display_types).build(field_name)
}

/// Builds descriptors for `field_names` with the default width, preserving
/// order.
///
/// # Errors
///
/// See [`ColumnBuilder::build_all`].
pub fn build_columns<S: AsRef<str>>(
    field_names: &[S],
    index: &SchemaIndex,
    display_types: &DisplayTypeMap,
) -> InferenceResult<Vec<ColumnDescriptor>> {
    ColumnBuilder::new(index, display_types).build_all(field_names)
}
