//! # colgrid host
//!
//! Hosting component for column inference. A [`CollectionTable`] takes a
//! record collection and its [`TableConfig`], resolves the records' object
//! type, fetches the object schema and the display-type map through its
//! [`Collaborators`], runs the [`colgrid_core`] engine and hands the
//! columns to a [`RenderSink`].
//!
//! # Architecture
//!
//! ```text
//! CollectionTable::connect()
//!   1. display_type_map()        (once per instance)
//!   2. RecordOrigin::detect()    → Collection | SingleRecord
//!   3. RecordLookup              → ObjectResolved   (SingleRecord only)
//!   4. SchemaProvider            → SchemaReceived   → engine → RenderSink
//!   *. any retrieval failure     → NotificationSink + Failed
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod error;
pub mod notification;
pub mod state;
pub mod table;
pub mod traits;

pub use config::{SortDirection, TableConfig, FIELD_LIST_DELIMITER};
pub use error::{HostError, HostResult};
pub use notification::{
    reduce_errors, Notification, NotificationMode, NotificationVariant,
    DISPLAY_TYPES_ERROR_TITLE, RECORD_LOOKUP_ERROR_TITLE, SCHEMA_ERROR_TITLE,
};
pub use state::{LoadEvent, LoadState};
pub use table::{CollectionTable, Collaborators, RecordOrigin};
pub use traits::{NotificationSink, RecordLookup, RenderRequest, RenderSink, SchemaProvider};
