//! Inference error types.
//!
//! Provides [`InferenceError`] for column construction failures, plus a
//! convenience [`InferenceResult`] alias.

use thiserror::Error;

/// Result alias for column inference operations.
pub type InferenceResult<T> = Result<T, InferenceError>;

/// Errors raised while turning selected fields into column descriptors.
///
/// Both variants are hard failures. The engine never skips the offending
/// field and carries on, so a missing column always comes with a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    /// A requested field has no entry in the object's schema index.
    #[error("field '{field}' is not describable on this object")]
    UndescribableField {
        /// The field name that was looked up.
        field: String,
    },

    /// A field's data type has no render-type token in the display map.
    #[error("field '{field}' has unmapped data type '{data_type}'")]
    UnmappedDataType {
        /// The field whose column was being built.
        field: String,
        /// The raw data type from the schema, before uppercasing.
        data_type: String,
    },
}

impl InferenceError {
    /// Returns the field name the error refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::UndescribableField { field } | Self::UnmappedDataType { field, .. } => field,
        }
    }
}
