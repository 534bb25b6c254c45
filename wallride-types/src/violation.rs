//! Field-level validation failures.
//!
//! Validation in WallRide is batch-oriented: every invalid form field is
//! reported at once so the author can fix them in a single round trip.
//! A [`Violation`] is one such failure.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::FieldId;

/// Identifies the input a violation refers to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    /// A custom field, by definition id.
    Id(FieldId),
    /// A named scalar property such as `"title"` or `"language"`.
    Name(String),
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "field {id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// What went wrong with an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The referenced field definition does not exist.
    NotFound,
    /// The raw value does not coerce to the declared type.
    InvalidValue,
    /// A required value is absent or blank.
    Required,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub key: FieldKey,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn new(key: FieldKey, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            key,
            kind,
            message: message.into(),
        }
    }

    /// Unknown custom field id.
    pub fn not_found(id: FieldId) -> Self {
        Self::new(
            FieldKey::Id(id),
            ViolationKind::NotFound,
            format!("no custom field with id {id}"),
        )
    }

    /// Value rejected during coercion.
    pub fn invalid_value(key: FieldKey, reason: impl Into<String>) -> Self {
        Self::new(key, ViolationKind::InvalidValue, reason)
    }

    /// Required scalar property left empty.
    pub fn required(name: &str) -> Self {
        Self::new(
            FieldKey::Name(name.to_string()),
            ViolationKind::Required,
            format!("{name} is required"),
        )
    }

    /// Returns true if this violation is about the given custom field.
    #[must_use]
    pub fn is_for_field(&self, id: FieldId) -> bool {
        self.key == FieldKey::Id(id)
    }

    /// Returns true if this violation is about the named scalar property.
    #[must_use]
    pub fn is_for_property(&self, name: &str) -> bool {
        matches!(&self.key, FieldKey::Name(n) if n == name)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// Renders a list of violations as a single `; `-separated line.
pub fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
