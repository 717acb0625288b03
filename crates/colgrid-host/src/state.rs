//! Load state machine.
//!
//! ```text
//! AwaitingRecords ──ObjectResolved──▶ AwaitingSchema ──SchemaReceived──▶ Ready
//!        │                                  │                            │  ▲
//!        └──────────Failed──────────────────┴──────────Failed────────────┘  │
//!                                                        SchemaReceived ────┘
//! ```
//!
//! Column inference runs only on a `SchemaReceived` transition. A repeated
//! schema delivery in `Ready` re-runs it for the same object. `Reset` returns
//! any state to `AwaitingRecords`.

use std::fmt;

use crate::error::{HostError, HostResult};

/// Where the host is in the record → object type → schema sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No object type known yet.
    #[default]
    AwaitingRecords,

    /// Object type known, schema not yet delivered.
    AwaitingSchema {
        /// Object type whose schema is awaited.
        object_api_name: String,
    },

    /// Columns were inferred and handed to the renderer.
    Ready {
        /// Object type of the rendered records.
        object_api_name: String,
    },

    /// A collaborator failed.
    Failed {
        /// Reduced failure message.
        reason: String,
    },
}

/// Inputs to the load state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadEvent {
    /// The records' object type became known.
    ObjectResolved(String),
    /// The object schema arrived.
    SchemaReceived,
    /// A collaborator or the engine failed.
    Failed(String),
    /// Start over.
    Reset,
}

impl LoadEvent {
    fn name(&self) -> &'static str {
        match self {
            LoadEvent::ObjectResolved(_) => "object resolved",
            LoadEvent::SchemaReceived => "schema received",
            LoadEvent::Failed(_) => "failed",
            LoadEvent::Reset => "reset",
        }
    }
}

impl LoadState {
    /// Applies `event`, returning the next state.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidTransition`] if the current state does
    /// not accept `event`.
    pub fn apply(&self, event: LoadEvent) -> HostResult<LoadState> {
        match (self, event) {
            (_, LoadEvent::Reset) => Ok(LoadState::AwaitingRecords),
            (LoadState::Failed { .. }, event) => Err(self.reject(&event)),
            (_, LoadEvent::Failed(reason)) => Ok(LoadState::Failed { reason }),
            (LoadState::AwaitingRecords, LoadEvent::ObjectResolved(object_api_name)) => {
                Ok(LoadState::AwaitingSchema { object_api_name })
            }
            (
                LoadState::AwaitingSchema { object_api_name }
                | LoadState::Ready { object_api_name },
                LoadEvent::SchemaReceived,
            ) => Ok(LoadState::Ready {
                object_api_name: object_api_name.clone(),
            }),
            (_, event) => Err(self.reject(&event)),
        }
    }

    /// The object type, once resolved.
    #[must_use]
    pub fn object_api_name(&self) -> Option<&str> {
        match self {
            LoadState::AwaitingSchema { object_api_name }
            | LoadState::Ready { object_api_name } => Some(object_api_name),
            LoadState::AwaitingRecords | LoadState::Failed { .. } => None,
        }
    }

    /// Returns `true` in the `Ready` state.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready { .. })
    }

    /// Returns `true` in the `Failed` state.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed { .. })
    }

    fn reject(&self, event: &LoadEvent) -> HostError {
        HostError::InvalidTransition {
            state: self.to_string(),
            event: event.name(),
        }
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::AwaitingRecords => write!(f, "awaiting records"),
            LoadState::AwaitingSchema { object_api_name } => {
                write!(f, "awaiting schema for '{object_api_name}'")
            }
            LoadState::Ready { object_api_name } => write!(f, "ready ('{object_api_name}')"),
            LoadState::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}
