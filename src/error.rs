//! Error type shared by every exercise

use thiserror::Error;

/// Raised only when a required argument is absent or out of range.
///
/// "No answer" outcomes (no valid candidate, no unique item, ...) are
/// ordinary return values, never errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExerciseError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ExerciseError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(%message, "rejecting input");
        ExerciseError::InvalidInput(message)
    }
}

pub type Result<T> = std::result::Result<T, ExerciseError>;
