//! Error types for the custom field model.

use thiserror::Error;
use wallride_types::{describe, FieldId, FieldKey, Violation};

/// Result type for field operations.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors that can occur while coercing or assembling field values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// No definition exists for the referenced id.
    #[error("custom field not found: {0}")]
    NotFound(FieldId),

    /// The raw value does not coerce to the field's declared type.
    #[error("invalid value for field {field_id}: {reason}")]
    InvalidValue { field_id: FieldId, reason: String },

    /// A definition breaks its own invariants (e.g. a select without options).
    #[error("invalid field definition: {0}")]
    InvalidDefinition(String),

    /// An attribute set already holds a value for this field.
    #[error("duplicate value for field {0}")]
    DuplicateValue(FieldId),

    /// Batch validation failed; every per-field failure is listed.
    #[error("validation failed: {}", describe(.errors))]
    ValidationFailed { errors: Vec<Violation> },
}

impl FieldError {
    pub(crate) fn invalid(field_id: FieldId, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field_id,
            reason: reason.into(),
        }
    }

    /// Flattens this error into the violations it represents.
    pub fn into_violations(self) -> Vec<Violation> {
        match self {
            Self::NotFound(id) => vec![Violation::not_found(id)],
            Self::InvalidValue { field_id, reason } => {
                vec![Violation::invalid_value(FieldKey::Id(field_id), reason)]
            }
            Self::DuplicateValue(id) => vec![Violation::invalid_value(
                FieldKey::Id(id),
                "field appears more than once",
            )],
            Self::InvalidDefinition(reason) => vec![Violation::invalid_value(
                FieldKey::Name("definition".to_string()),
                reason,
            )],
            Self::ValidationFailed { errors } => errors,
        }
    }
}
