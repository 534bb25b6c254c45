//! Error types for content requests.

use thiserror::Error;
use wallride_model::FieldError;
use wallride_types::{describe, Violation};

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors that can occur while building a content request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentError {
    /// One or more inputs are missing or invalid; all are listed.
    #[error("validation failed: {}", describe(.errors))]
    ValidationFailed { errors: Vec<Violation> },

    /// A custom field operation failed outside batch validation.
    #[error(transparent)]
    Field(#[from] FieldError),
}

impl ContentError {
    /// The individual violations behind this error.
    pub fn violations(&self) -> Vec<Violation> {
        match self {
            Self::ValidationFailed { errors } => errors.clone(),
            Self::Field(e) => e.clone().into_violations(),
        }
    }
}
