//! Error types for the hosting component.

use colgrid_core::InferenceError;
use thiserror::Error;

/// Result alias for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// Errors from the hosting component and its collaborators.
#[derive(Debug, Error)]
pub enum HostError {
    /// Column inference rejected a field. Never reported as a notification
    /// by the host; the caller decides.
    #[error("column inference failed: {0}")]
    Inference(#[from] InferenceError),

    /// A collaborator failed to retrieve records, schema, or the display
    /// type map.
    #[error("{message}")]
    Retrieval {
        /// What failed.
        message: String,
        /// The collaborator's underlying error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A load-state event arrived in a state that does not accept it.
    #[error("invalid transition: '{event}' while {state}")]
    InvalidTransition {
        /// The state the host was in.
        state: String,
        /// The rejected event.
        event: &'static str,
    },

    /// A delivered schema describes a different object than the one the
    /// records resolved to.
    #[error("schema for '{received}' delivered while loading '{expected}'")]
    SchemaMismatch {
        /// The resolved object type.
        expected: String,
        /// The object type the schema describes.
        received: String,
    },

    /// Component configuration could not be parsed.
    #[error("invalid config: {0}")]
    Config(String),
}

impl HostError {
    /// Creates a retrieval error with no underlying source.
    pub fn retrieval(message: impl Into<String>) -> Self {
        Self::Retrieval {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a retrieval error wrapping a collaborator error.
    pub fn retrieval_with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Retrieval {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns `true` for collaborator retrieval failures.
    #[must_use]
    pub fn is_retrieval(&self) -> bool {
        matches!(self, Self::Retrieval { .. })
    }
}

impl From<serde_json::Error> for HostError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
