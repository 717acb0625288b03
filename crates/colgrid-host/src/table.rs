//! The collection table host.
//!
//! Drives the record → object type → schema sequence against its
//! collaborators, runs column inference once the schema is available and
//! hands the result to the rendering sink.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut table = CollectionTable::new(config, records, collaborators);
//! table.connect().await?;
//! assert!(table.state().is_ready());
//! ```

use std::sync::Arc;

use colgrid_core::{
    first_record_id, ColumnInferenceEngine, DisplayTypeMap, LayoutMode, ObjectSchema, RecordRow,
    TableLayout,
};
use tokio::sync::OnceCell;

use crate::config::TableConfig;
use crate::error::{HostError, HostResult};
use crate::notification::{
    reduce_errors, Notification, DISPLAY_TYPES_ERROR_TITLE, RECORD_LOOKUP_ERROR_TITLE,
    SCHEMA_ERROR_TITLE,
};
use crate::state::{LoadEvent, LoadState};
use crate::traits::{NotificationSink, RecordLookup, RenderRequest, RenderSink, SchemaProvider};

/// How the records' object type is determined. Exactly one path is taken
/// per table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOrigin {
    /// Look up the object type of this record.
    SingleRecord {
        /// Id taken from the first row carrying one.
        record_id: String,
    },
    /// The collection's object type is already known.
    Collection {
        /// Declared object type.
        object_api_name: String,
    },
}

impl RecordOrigin {
    /// Picks the initialization path.
    ///
    /// A declared object type wins, since it needs no lookup. Otherwise the
    /// first row with an `Id` drives a single-record lookup. Returns `None`
    /// when neither is available.
    #[must_use]
    pub fn detect(config: &TableConfig, records: &[RecordRow]) -> Option<Self> {
        if let Some(name) = config.object_api_name.as_deref().filter(|n| !n.is_empty()) {
            return Some(RecordOrigin::Collection {
                object_api_name: name.to_string(),
            });
        }
        first_record_id(records).map(|id| RecordOrigin::SingleRecord {
            record_id: id.to_string(),
        })
    }
}

/// The external collaborators a table talks to.
#[derive(Clone)]
pub struct Collaborators {
    /// Object schemas and the display-type map.
    pub schema_provider: Arc<dyn SchemaProvider>,
    /// Record id → object type.
    pub record_lookup: Arc<dyn RecordLookup>,
    /// Receives the finished table.
    pub render_sink: Arc<dyn RenderSink>,
    /// User-facing notifications.
    pub notifier: Arc<dyn NotificationSink>,
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

/// Hosts one table over one record collection.
#[derive(Debug)]
pub struct CollectionTable {
    config: TableConfig,
    records: Vec<RecordRow>,
    collaborators: Collaborators,
    /// Fetched once per instance, read-only afterward.
    display_types: OnceCell<Arc<DisplayTypeMap>>,
    state: LoadState,
    layout: Option<TableLayout>,
}

impl CollectionTable {
    /// Creates a table in the `AwaitingRecords` state.
    #[must_use]
    pub fn new(config: TableConfig, records: Vec<RecordRow>, collaborators: Collaborators) -> Self {
        Self {
            config,
            records,
            collaborators,
            display_types: OnceCell::new(),
            state: LoadState::AwaitingRecords,
            layout: None,
        }
    }

    /// Current load state.
    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The last inferred layout, once `Ready`.
    #[must_use]
    pub fn layout(&self) -> Option<&TableLayout> {
        self.layout.as_ref()
    }

    /// Width layout hint of the last inferred layout.
    #[must_use]
    pub fn column_widths_mode(&self) -> Option<LayoutMode> {
        self.layout.as_ref().map(|l| l.layout_mode)
    }

    /// The record collection.
    #[must_use]
    pub fn records(&self) -> &[RecordRow] {
        &self.records
    }

    /// The table configuration.
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Runs the whole load sequence.
    ///
    /// An empty record collection, or one with neither a declared object
    /// type nor a row `Id`, is a no-op: nothing is fetched or rendered.
    /// Connecting again once the object type is resolved, or after a
    /// failure, is also a no-op; call [`reset`](Self::reset) to reload.
    ///
    /// # Errors
    ///
    /// Returns the retrieval error after notifying the user and moving to
    /// `Failed`, or the inference error after moving to `Failed`.
    pub async fn connect(&mut self) -> HostResult<()> {
        if self.records.is_empty() {
            tracing::debug!("Empty record collection, nothing to render");
            return Ok(());
        }
        if self.state != LoadState::AwaitingRecords {
            tracing::debug!(state = %self.state, "Already connected");
            return Ok(());
        }

        self.display_types().await?;

        let Some(origin) = RecordOrigin::detect(&self.config, &self.records) else {
            tracing::debug!(
                records = self.records.len(),
                "No object type or record id, nothing to render"
            );
            return Ok(());
        };

        let object_api_name = match origin {
            RecordOrigin::Collection { object_api_name } => object_api_name,
            RecordOrigin::SingleRecord { record_id } => {
                let lookup = Arc::clone(&self.collaborators.record_lookup);
                match lookup.object_api_name(&record_id).await {
                    Ok(name) => name,
                    Err(e) => return Err(self.fail(RECORD_LOOKUP_ERROR_TITLE, e)),
                }
            }
        };
        self.object_resolved(object_api_name)?;

        let Some(object_api_name) = self.state.object_api_name().map(str::to_string) else {
            return Ok(());
        };
        let provider = Arc::clone(&self.collaborators.schema_provider);
        match provider.object_schema(&object_api_name).await {
            Ok(schema) => self.schema_received(&schema).await.map(|_| ()),
            Err(e) => Err(self.fail(SCHEMA_ERROR_TITLE, e)),
        }
    }

    /// Replaces the record collection before loading starts.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidTransition`] unless awaiting records.
    pub fn records_received(&mut self, records: Vec<RecordRow>) -> HostResult<()> {
        if self.state != LoadState::AwaitingRecords {
            return Err(HostError::InvalidTransition {
                state: self.state.to_string(),
                event: "records received",
            });
        }
        tracing::debug!(records = records.len(), "Records received");
        self.records = records;
        Ok(())
    }

    /// Records the object type of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidTransition`] unless awaiting records.
    pub fn object_resolved(&mut self, object_api_name: impl Into<String>) -> HostResult<()> {
        self.transition(LoadEvent::ObjectResolved(object_api_name.into()))
    }

    /// Handles a delivered object schema: infers the columns, moves to
    /// `Ready` and hands the table to the rendering sink.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidTransition`] unless awaiting a schema or
    /// ready, [`HostError::SchemaMismatch`] if `schema` describes another
    /// object (the state is left unchanged), a retrieval error if the
    /// display-type map cannot be loaded, or [`HostError::Inference`] if a
    /// column cannot be built (the table moves to `Failed`).
    pub async fn schema_received(&mut self, schema: &ObjectSchema) -> HostResult<&TableLayout> {
        let Some(object_api_name) = self.state.object_api_name().map(str::to_string) else {
            return Err(HostError::InvalidTransition {
                state: self.state.to_string(),
                event: "schema received",
            });
        };
        if !schema.api_name.is_empty() && !schema.api_name.eq_ignore_ascii_case(&object_api_name) {
            tracing::warn!(
                object = %object_api_name,
                schema = %schema.api_name,
                "Ignoring schema for another object"
            );
            return Err(HostError::SchemaMismatch {
                expected: object_api_name,
                received: schema.api_name.clone(),
            });
        }

        let display_types = self.display_types().await?;
        let engine = ColumnInferenceEngine::with_config(display_types, self.config.engine.clone());

        let layout =
            match engine.infer_for_schema(&self.records, schema, self.config.explicit_fields()) {
                Ok(layout) => layout,
                Err(e) => {
                    tracing::warn!(object = %object_api_name, error = %e, "Column inference failed");
                    self.state = self.state.apply(LoadEvent::Failed(e.to_string()))?;
                    self.layout = None;
                    return Err(e.into());
                }
            };

        self.transition(LoadEvent::SchemaReceived)?;
        tracing::info!(
            object = %object_api_name,
            columns = layout.columns.len(),
            layout = %layout.layout_mode,
            "Table ready"
        );

        self.collaborators.render_sink.initialize_table(RenderRequest {
            object_api_name,
            columns: layout.columns.clone(),
            records: self.records.clone(),
            layout_mode: layout.layout_mode,
            title: self.config.display_title(self.records.len()),
            options: self.config.clone(),
        });

        Ok(self.layout.insert(layout))
    }

    /// Reports a collaborator failure: notifies the user with `title` and
    /// the reduced message, moves to `Failed` and drops the last layout.
    ///
    /// Returns the error for propagation.
    pub fn fail(&mut self, title: &str, error: HostError) -> HostError {
        let reason = reduce_errors(&error).into_iter().next().unwrap_or_default();
        tracing::warn!(title, error = %error, "Table load failed");

        self.collaborators
            .notifier
            .notify(Notification::error(title, &error));
        if let Ok(next) = self.state.apply(LoadEvent::Failed(reason)) {
            self.state = next;
        }
        self.layout = None;
        error
    }

    /// Returns to `AwaitingRecords`, dropping the last layout. The cached
    /// display-type map is kept.
    pub fn reset(&mut self) {
        self.state = LoadState::AwaitingRecords;
        self.layout = None;
    }

    /// The display-type map, fetched on first use.
    async fn display_types(&mut self) -> HostResult<Arc<DisplayTypeMap>> {
        let provider = Arc::clone(&self.collaborators.schema_provider);
        let fetched = self
            .display_types
            .get_or_try_init(|| async move {
                let map = provider.display_type_map().await?;
                tracing::debug!(entries = map.len(), "Loaded display type map");
                Ok::<_, HostError>(Arc::new(map))
            })
            .await
            .map(Arc::clone);

        match fetched {
            Ok(map) => Ok(map),
            Err(e) => Err(self.fail(DISPLAY_TYPES_ERROR_TITLE, e)),
        }
    }

    fn transition(&mut self, event: LoadEvent) -> HostResult<()> {
        self.state = self.state.apply(event)?;
        Ok(())
    }
}
