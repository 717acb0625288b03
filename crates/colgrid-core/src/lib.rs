//! # colgrid core
//!
//! Column inference for record-collection tables: given an object's field
//! schema and a collection of loosely-typed records, derive the ordered
//! column descriptors a generic grid renderer needs.
//!
//! - **Schema index** ([`schema`]): field name to label, data type and API
//!   name
//! - **Field selection** ([`selector`]): explicit allow-list, or the schema
//!   fields seen in the records in first-occurrence order
//! - **Column building** ([`column`]): schema metadata plus the
//!   [`DisplayTypeMap`] produce each [`ColumnDescriptor`]
//! - **Layout** ([`layout`]): `auto` widths for curated lists, `fixed` for
//!   inferred ones
//!
//! [`ColumnInferenceEngine`] runs the three steps. It is synchronous and
//! pure; fetching schemas and records is the caller's business.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use colgrid_core::{ColumnInferenceEngine, DisplayTypeMap, FieldMetadata, ObjectSchema, RecordRow};
//!
//! let schema = ObjectSchema::new("Account")
//!     .with_field(FieldMetadata::new("Id", "ID", "ID"))
//!     .with_field(FieldMetadata::new("Name", "Name", "STRING"));
//! let records = vec![RecordRow::new().with("Id", "001").with("Name", "Acme")];
//!
//! let engine = ColumnInferenceEngine::new(Arc::new(DisplayTypeMap::standard()));
//! let layout = engine.infer_for_schema(&records, &schema, None)?;
//! assert_eq!(layout.columns.len(), 2);
//! # Ok::<(), colgrid_core::InferenceError>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod column;
pub mod display_types;
pub mod engine;
pub mod error;
pub mod layout;
pub mod record;
pub mod schema;
pub mod selector;

// ── Re-exports for convenience ─────────────────────────────────────

pub use column::{build_column, build_columns, ColumnBuilder, ColumnDescriptor, DEFAULT_INITIAL_WIDTH};
pub use display_types::DisplayTypeMap;
pub use engine::{ColumnInferenceEngine, EngineConfig, TableLayout};
pub use error::{InferenceError, InferenceResult};
pub use layout::{decide_layout_mode, LayoutMode};
pub use record::{first_record_id, RecordRow, ID_FIELD};
pub use schema::{FieldMetadata, ObjectSchema, SchemaIndex};
pub use selector::{parse_field_list, select_fields, FieldSelection, SelectionMode};
