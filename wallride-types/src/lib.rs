//! Core type definitions for WallRide.
//!
//! This crate defines the small, dependency-light types shared by every
//! other WallRide crate:
//! - Numeric identifiers for fields, posts, categories and users
//! - UUID-based media identifiers
//! - Opaque language tags
//! - Field-level validation violations reported back to the form layer

mod ids;
mod language;
mod violation;

pub use ids::{CategoryId, FieldId, MediaId, PostId, UserId};
pub use language::Language;
pub use violation::{describe, FieldKey, Violation, ViolationKind};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid numeric id: {0}")]
    InvalidNumericId(#[from] std::num::ParseIntError),

    #[error("invalid language tag: {0:?}")]
    InvalidLanguage(String),
}
