//! User-facing notifications for retrieval failures.

use serde::Serialize;

/// Title used when the single-record lookup fails.
pub const RECORD_LOOKUP_ERROR_TITLE: &str = "getRecord error";

/// Title used when the object schema fetch fails.
pub const SCHEMA_ERROR_TITLE: &str = "getObjectInfo error";

/// Title used when the display-type map fetch fails.
pub const DISPLAY_TYPES_ERROR_TITLE: &str = "getDisplayTypeMap error";

/// Visual variant of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    /// Informational.
    Info,
    /// Success confirmation.
    Success,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

/// How long a notification stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationMode {
    /// Dismissed automatically.
    Dismissible,
    /// Dismissed automatically, no close button.
    Pester,
    /// Stays until the user closes it.
    Sticky,
}

/// A notification for the host's notification sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Visual variant.
    pub variant: NotificationVariant,
    /// Visibility mode.
    pub mode: NotificationMode,
}

impl Notification {
    /// Builds a sticky error notification whose message is the first
    /// reduced message of `error`.
    #[must_use]
    pub fn error(title: impl Into<String>, error: &(dyn std::error::Error + 'static)) -> Self {
        let message = reduce_errors(error).into_iter().next().unwrap_or_default();
        Self {
            title: title.into(),
            message,
            variant: NotificationVariant::Error,
            mode: NotificationMode::Sticky,
        }
    }
}

/// Flattens an error and its source chain into distinct, non-empty
/// messages, outermost first.
#[must_use]
pub fn reduce_errors(error: &(dyn std::error::Error + 'static)) -> Vec<String> {
    let mut messages: Vec<String> = Vec::new();
    let mut current = Some(error);
    while let Some(err) = current {
        let message = err.to_string();
        let message = message.trim();
        if !message.is_empty() && !messages.iter().any(|m| m == message) {
            messages.push(message.to_string());
        }
        current = err.source();
    }
    messages
}
