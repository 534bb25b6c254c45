use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use wallride_types::FieldId;

use crate::FieldType;

/// A typed custom field value.
///
/// Exactly one slot can be populated, and which one is encoded in the
/// variant, so reading a value never needs an unchecked cast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    String(String),
    Number(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Returns true if this slot kind is legal for `field_type`.
    #[must_use]
    pub fn fits(&self, field_type: FieldType) -> bool {
        match self {
            Self::String(_) => field_type.is_textual() || field_type.is_enumerated(),
            Self::Number(_) => field_type == FieldType::Number,
            Self::Date(_) => field_type == FieldType::Date,
            Self::DateTime(_) => field_type == FieldType::DateTime,
        }
    }
}

/// A value bound to one custom field of one content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValue {
    pub field_id: FieldId,
    pub value: FieldValue,
}

impl AttributeValue {
    pub fn new(field_id: FieldId, value: FieldValue) -> Self {
        Self { field_id, value }
    }
}
