//! The column inference engine.
//!
//! Runs the three steps in order:
//!
//! ```text
//! records + schema + allow-list
//!   → SchemaIndex::build        (index by field name)
//!   → select_fields             (explicit or inferred names)
//!   → ColumnBuilder::build_all  (descriptors)
//!   → TableLayout { columns, layout_mode }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::column::{ColumnBuilder, ColumnDescriptor, DEFAULT_INITIAL_WIDTH};
use crate::display_types::DisplayTypeMap;
use crate::error::InferenceResult;
use crate::layout::{decide_layout_mode, LayoutMode};
use crate::record::RecordRow;
use crate::schema::{ObjectSchema, SchemaIndex};
use crate::selector::{select_fields, SelectionMode};

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Initial width given to every column. Default: 200.
    pub initial_width: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_width: DEFAULT_INITIAL_WIDTH,
        }
    }
}

impl EngineConfig {
    /// Sets the initial column width.
    #[must_use]
    pub fn with_initial_width(mut self, width: u32) -> Self {
        self.initial_width = width;
        self
    }
}

/// Output of one inference call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Column descriptors, in display order.
    pub columns: Vec<ColumnDescriptor>,

    /// Width layout hint for the renderer.
    pub layout_mode: LayoutMode,

    /// How the columns' fields were selected.
    pub selection_mode: SelectionMode,
}

impl TableLayout {
    /// Returns `true` if there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Derives column descriptors from a schema and a record collection.
///
/// Holds only the display-type map, which is shared and never rewritten.
/// Each [`infer`](Self::infer) call is independent and side-effect free.
#[derive(Debug, Clone)]
pub struct ColumnInferenceEngine {
    display_types: Arc<DisplayTypeMap>,
    config: EngineConfig,
}

impl ColumnInferenceEngine {
    /// Creates an engine over a display-type map.
    #[must_use]
    pub fn new(display_types: Arc<DisplayTypeMap>) -> Self {
        Self::with_config(display_types, EngineConfig::default())
    }

    /// Creates an engine with explicit configuration.
    #[must_use]
    pub fn with_config(display_types: Arc<DisplayTypeMap>, config: EngineConfig) -> Self {
        Self {
            display_types,
            config,
        }
    }

    /// The display-type map in use.
    #[must_use]
    pub fn display_types(&self) -> &DisplayTypeMap {
        &self.display_types
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Infers the columns for `records` against `index`.
    ///
    /// A non-empty `explicit` list is used verbatim as the column order
    /// (layout `auto`); otherwise the fields are inferred from the records
    /// (layout `fixed`). Empty records with no explicit list yield an empty
    /// layout.
    ///
    /// # Errors
    ///
    /// Propagates the first [`InferenceError`](crate::InferenceError) raised
    /// while building columns.
    pub fn infer(
        &self,
        records: &[RecordRow],
        index: &SchemaIndex,
        explicit: Option<&[String]>,
    ) -> InferenceResult<TableLayout> {
        let selection = select_fields(records, index, explicit);
        let columns = ColumnBuilder::new(index, &self.display_types)
            .with_initial_width(self.config.initial_width)
            .build_all(&selection.fields)?;
        let layout_mode = decide_layout_mode(selection.mode);

        tracing::debug!(
            records = records.len(),
            indexed_fields = index.len(),
            columns = columns.len(),
            selection = %selection.mode,
            layout = %layout_mode,
            "Inferred table columns"
        );

        Ok(TableLayout {
            columns,
            layout_mode,
            selection_mode: selection.mode,
        })
    }

    /// Indexes `schema` and infers the columns for `records`.
    ///
    /// # Errors
    ///
    /// See [`infer`](Self::infer).
    pub fn infer_for_schema(
        &self,
        records: &[RecordRow],
        schema: &ObjectSchema,
        explicit: Option<&[String]>,
    ) -> InferenceResult<TableLayout> {
        self.infer(records, &SchemaIndex::from_schema(schema), explicit)
    }
}
