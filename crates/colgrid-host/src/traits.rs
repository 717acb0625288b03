//! Collaborator traits for the hosting component.
//!
//! | Trait | Purpose | Sync/Async |
//! |-------|---------|------------|
//! | [`SchemaProvider`] | Object schemas and the display-type map | Async |
//! | [`RecordLookup`] | Record id → object type | Async |
//! | [`RenderSink`] | Receives finished columns and records | Sync |
//! | [`NotificationSink`] | Shows retrieval failures to the user | Sync |
//!
//! Retrieval errors are returned as
//! [`HostError::Retrieval`](crate::HostError::Retrieval); the host turns
//! them into notifications.

use async_trait::async_trait;
use colgrid_core::{ColumnDescriptor, DisplayTypeMap, LayoutMode, ObjectSchema, RecordRow};

use crate::config::TableConfig;
use crate::error::HostResult;
use crate::notification::Notification;

// ── SchemaProvider ─────────────────────────────────────────────────

/// Supplies object schemas and the global display-type map.
#[async_trait]
pub trait SchemaProvider: Send + Sync {
    /// Fetches the field schema of one object type.
    ///
    /// # Errors
    ///
    /// Returns a retrieval error if the schema cannot be described.
    async fn object_schema(&self, object_api_name: &str) -> HostResult<ObjectSchema>;

    /// Fetches the data-type to render-type map.
    ///
    /// The host calls this at most once per instance.
    ///
    /// # Errors
    ///
    /// Returns a retrieval error if the map cannot be loaded.
    async fn display_type_map(&self) -> HostResult<DisplayTypeMap>;
}

// ── RecordLookup ───────────────────────────────────────────────────

/// Resolves the object type of a single record.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// Returns the object API name of the record `record_id`.
    ///
    /// # Errors
    ///
    /// Returns a retrieval error if the record cannot be read.
    async fn object_api_name(&self, record_id: &str) -> HostResult<String>;
}

// ── RenderSink ─────────────────────────────────────────────────────

/// Everything the rendering sink needs to draw the table.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// Object type the records belong to.
    pub object_api_name: String,

    /// Column descriptors, in display order.
    pub columns: Vec<ColumnDescriptor>,

    /// The original records, unchanged.
    pub records: Vec<RecordRow>,

    /// Width layout hint.
    pub layout_mode: LayoutMode,

    /// Title with the optional record count applied.
    pub title: Option<String>,

    /// Pass-through table options (checkbox type, sortable and editable
    /// fields, initial sort).
    pub options: TableConfig,
}

/// Receives the finished table. The hand-off is final.
pub trait RenderSink: Send + Sync {
    /// Initializes the table with columns and records.
    fn initialize_table(&self, request: RenderRequest);
}

// ── NotificationSink ───────────────────────────────────────────────

/// User-facing notification channel.
pub trait NotificationSink: Send + Sync {
    /// Shows a notification.
    fn notify(&self, notification: Notification);
}
