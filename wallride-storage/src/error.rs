//! Error types for the storage layer.

use thiserror::Error;
use wallride_types::FieldId;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Field definition not found.
    #[error("custom field not found: {0}")]
    NotFound(FieldId),

    /// Page size of zero, or similar.
    #[error("invalid page request: {0}")]
    InvalidPageRequest(String),

    /// Registry configuration is inconsistent.
    #[error("invalid registry config: {0}")]
    InvalidConfig(String),

    /// Two definitions share an id.
    #[error("duplicate custom field id: {0}")]
    DuplicateField(FieldId),

    /// A definition breaks its own invariants.
    #[error("invalid definition: {0}")]
    InvalidDefinition(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
