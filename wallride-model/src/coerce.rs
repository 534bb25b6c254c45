//! Raw form strings to typed field values, and back.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;
use wallride_types::FieldId;

use crate::{AttributeValue, FieldDefinition, FieldError, FieldResult, FieldType, FieldValue};

/// Date pattern used by the admin forms (`yyyy/MM/dd`).
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Date-time pattern used by the admin forms (`yyyy/MM/dd HH:mm`).
pub const DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Configuration for value coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoercionConfig {
    /// chrono format for `date` fields.
    pub date_format: String,
    /// chrono format for `date_time` fields.
    pub datetime_format: String,
    /// Separator between choices of a `checkbox` field.
    pub checkbox_separator: String,
}

impl Default for CoercionConfig {
    fn default() -> Self {
        Self {
            date_format: DATE_FORMAT.to_string(),
            datetime_format: DATETIME_FORMAT.to_string(),
            checkbox_separator: ",".to_string(),
        }
    }
}

/// Resolves field definitions by id.
pub trait FieldLookup {
    fn find_field(&self, id: FieldId) -> Option<&FieldDefinition>;
}

impl FieldLookup for [FieldDefinition] {
    fn find_field(&self, id: FieldId) -> Option<&FieldDefinition> {
        self.iter().find(|f| f.id == id)
    }
}

impl FieldLookup for Vec<FieldDefinition> {
    fn find_field(&self, id: FieldId) -> Option<&FieldDefinition> {
        self.as_slice().find_field(id)
    }
}

impl FieldLookup for HashMap<FieldId, FieldDefinition> {
    fn find_field(&self, id: FieldId) -> Option<&FieldDefinition> {
        self.get(&id)
    }
}

impl FieldLookup for BTreeMap<FieldId, FieldDefinition> {
    fn find_field(&self, id: FieldId) -> Option<&FieldDefinition> {
        self.get(&id)
    }
}

/// Converts raw form input into [`AttributeValue`]s according to each
/// field's declared type.
#[derive(Debug, Clone, Default)]
pub struct ValueCoercer {
    config: CoercionConfig,
}

impl ValueCoercer {
    pub fn new(config: CoercionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CoercionConfig {
        &self.config
    }

    /// Coerces `raw` into a value for `field`.
    ///
    /// Only text types tolerate surrounding whitespace and blank input (blank
    /// is stored as an empty string unless the field is `required`). Select
    /// and radio input must equal an option exactly. Numbers and dates are
    /// trimmed for parsing, and blank input for them is rejected.
    pub fn coerce(&self, field: &FieldDefinition, raw: &str) -> FieldResult<AttributeValue> {
        let result = self.coerce_value(field, raw);
        if let Err(FieldError::InvalidValue { reason, .. }) = &result {
            debug!(
                field_id = %field.id,
                field_type = field.field_type.as_str(),
                "rejected custom field value: {reason}"
            );
        }
        result.map(|value| AttributeValue::new(field.id, value))
    }

    /// Looks `id` up in `fields`, then coerces `raw` against it.
    pub fn coerce_by_id<L>(&self, fields: &L, id: FieldId, raw: &str) -> FieldResult<AttributeValue>
    where
        L: FieldLookup + ?Sized,
    {
        let field = fields.find_field(id).ok_or(FieldError::NotFound(id))?;
        self.coerce(field, raw)
    }

    /// Renders a value back to the raw string a form would submit.
    pub fn render(&self, value: &FieldValue) -> String {
        match value {
            FieldValue::String(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Date(d) => d.format(&self.config.date_format).to_string(),
            FieldValue::DateTime(dt) => dt.format(&self.config.datetime_format).to_string(),
        }
    }

    fn coerce_value(&self, field: &FieldDefinition, raw: &str) -> FieldResult<FieldValue> {
        match field.field_type {
            FieldType::Text | FieldType::TextArea | FieldType::Html => {
                let text = raw.trim();
                if text.is_empty() && field.required {
                    return Err(FieldError::invalid(field.id, "value is required"));
                }
                Ok(FieldValue::String(text.to_string()))
            }
            FieldType::Number => {
                let raw = present(field, raw)?;
                match raw.parse::<f64>() {
                    Ok(n) if n.is_finite() => Ok(FieldValue::Number(n)),
                    _ => Err(FieldError::invalid(field.id, format!("{raw:?} is not a number"))),
                }
            }
            FieldType::Date => {
                let raw = present(field, raw)?;
                NaiveDate::parse_from_str(raw, &self.config.date_format)
                    .map(FieldValue::Date)
                    .map_err(|e| {
                        FieldError::invalid(field.id, format!("{raw:?} is not a valid date: {e}"))
                    })
            }
            FieldType::DateTime => {
                let raw = present(field, raw)?;
                NaiveDateTime::parse_from_str(raw, &self.config.datetime_format)
                    .map(FieldValue::DateTime)
                    .map_err(|e| {
                        FieldError::invalid(
                            field.id,
                            format!("{raw:?} is not a valid date-time: {e}"),
                        )
                    })
            }
            FieldType::Select | FieldType::Radio => {
                if field.has_option(raw) {
                    Ok(FieldValue::String(raw.to_string()))
                } else {
                    Err(FieldError::invalid(
                        field.id,
                        format!("{raw:?} is not one of the options"),
                    ))
                }
            }
            FieldType::Checkbox => self.choices(field, raw),
        }
    }

    /// Checkbox input: every piece must be an option and at least one must
    /// be chosen. The stored form keeps option order and drops repeats, so
    /// re-coercing it is a no-op.
    fn choices(&self, field: &FieldDefinition, raw: &str) -> FieldResult<FieldValue> {
        let separator = self.config.checkbox_separator.as_str();
        let mut chosen = HashSet::new();
        for piece in raw.split(separator).map(str::trim).filter(|p| !p.is_empty()) {
            if !field.has_option(piece) {
                return Err(FieldError::invalid(
                    field.id,
                    format!("{piece:?} is not one of the options"),
                ));
            }
            chosen.insert(piece);
        }
        if chosen.is_empty() {
            return Err(FieldError::invalid(field.id, "no option chosen"));
        }
        let normalized = field
            .options
            .iter()
            .filter(|o| chosen.contains(o.as_str()))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(separator);
        Ok(FieldValue::String(normalized))
    }
}

/// Trimmed input for a parsed type; blank is an error.
fn present<'a>(field: &FieldDefinition, raw: &'a str) -> FieldResult<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(FieldError::invalid(field.id, "value is required"))
    } else {
        Ok(trimmed)
    }
}

/// Coerces with the default form patterns.
pub fn coerce(field: &FieldDefinition, raw: &str) -> FieldResult<AttributeValue> {
    ValueCoercer::default().coerce(field, raw)
}
