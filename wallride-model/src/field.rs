use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use wallride_types::{FieldId, Language};

use crate::{FieldError, FieldResult};

/// An administrator-defined custom field.
///
/// Definitions are read-only snapshots from the point of view of this crate;
/// creating and editing them is an administrative concern handled elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub id: FieldId,
    /// Stable machine key used by templates (e.g. `"subtitle"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub field_type: FieldType,
    /// Selectable values. Only meaningful when the type is enumerated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Display order; the default sort key.
    #[serde(default)]
    pub idx: i32,
    /// Raw value pre-filled into new forms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Language the definition belongs to. `None` applies to every language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default)]
    pub required: bool,
}

impl FieldDefinition {
    fn simple(id: i64, name: &str, field_type: FieldType) -> Self {
        Self {
            id: FieldId::new(id),
            code: None,
            name: name.into(),
            description: None,
            field_type,
            options: Vec::new(),
            idx: 0,
            default_value: None,
            language: None,
            required: false,
        }
    }

    fn enumerated(id: i64, name: &str, field_type: FieldType, options: Vec<String>) -> Self {
        Self {
            options,
            ..Self::simple(id, name, field_type)
        }
    }

    /// Shorthand for a single-line text field.
    pub fn text(id: i64, name: &str) -> Self {
        Self::simple(id, name, FieldType::Text)
    }

    /// Shorthand for a multi-line text field.
    pub fn text_area(id: i64, name: &str) -> Self {
        Self::simple(id, name, FieldType::TextArea)
    }

    /// Shorthand for a rich-text (HTML) field.
    pub fn html(id: i64, name: &str) -> Self {
        Self::simple(id, name, FieldType::Html)
    }

    /// Shorthand for a numeric field.
    pub fn number(id: i64, name: &str) -> Self {
        Self::simple(id, name, FieldType::Number)
    }

    /// Shorthand for a date field.
    pub fn date(id: i64, name: &str) -> Self {
        Self::simple(id, name, FieldType::Date)
    }

    /// Shorthand for a date-and-time field.
    pub fn datetime(id: i64, name: &str) -> Self {
        Self::simple(id, name, FieldType::DateTime)
    }

    /// Shorthand for a drop-down with fixed options.
    pub fn select(id: i64, name: &str, options: Vec<String>) -> Self {
        Self::enumerated(id, name, FieldType::Select, options)
    }

    /// Shorthand for a radio group with fixed options.
    pub fn radio(id: i64, name: &str, options: Vec<String>) -> Self {
        Self::enumerated(id, name, FieldType::Radio, options)
    }

    /// Shorthand for a checkbox group (multiple choice) with fixed options.
    pub fn checkbox(id: i64, name: &str, options: Vec<String>) -> Self {
        Self::enumerated(id, name, FieldType::Checkbox, options)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_idx(mut self, idx: i32) -> Self {
        self.idx = idx;
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Returns true if `value` is one of the declared options.
    #[must_use]
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }

    /// Returns true if this definition applies to content in `language`.
    #[must_use]
    pub fn applies_to(&self, language: &Language) -> bool {
        self.language.as_ref().is_none_or(|l| l == language)
    }

    /// Checks the definition's own invariants.
    ///
    /// Enumerated types need at least one option, with no blanks and no
    /// duplicates; all other types must have none.
    pub fn validate(&self) -> FieldResult<()> {
        if self.name.trim().is_empty() {
            return Err(FieldError::InvalidDefinition(format!(
                "field {} has a blank name",
                self.id
            )));
        }
        if self.field_type.is_enumerated() {
            if self.options.is_empty() {
                return Err(FieldError::InvalidDefinition(format!(
                    "{} field {} declares no options",
                    self.field_type.as_str(),
                    self.id
                )));
            }
            let mut seen = HashSet::new();
            for option in &self.options {
                if option.trim().is_empty() {
                    return Err(FieldError::InvalidDefinition(format!(
                        "field {} has a blank option",
                        self.id
                    )));
                }
                if !seen.insert(option.as_str()) {
                    return Err(FieldError::InvalidDefinition(format!(
                        "field {} repeats option {option:?}",
                        self.id
                    )));
                }
            }
        } else if !self.options.is_empty() {
            return Err(FieldError::InvalidDefinition(format!(
                "{} field {} must not declare options",
                self.field_type.as_str(),
                self.id
            )));
        }
        Ok(())
    }
}

/// The declared type of a custom field.
///
/// Serialized in snake_case. The older export names `selectbox`,
/// `textarea` and `datetime` are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    #[serde(alias = "textarea")]
    TextArea,
    Html,
    #[serde(alias = "selectbox")]
    Select,
    Radio,
    Checkbox,
    Number,
    Date,
    #[serde(alias = "datetime")]
    DateTime,
}

impl FieldType {
    /// Returns the snake_case name used in serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "text_area",
            Self::Html => "html",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Number => "number",
            Self::Date => "date",
            Self::DateTime => "date_time",
        }
    }

    /// Free-text types. Blank input is stored as an empty string.
    #[must_use]
    pub const fn is_textual(&self) -> bool {
        matches!(self, Self::Text | Self::TextArea | Self::Html)
    }

    /// Types whose values are restricted to the definition's options.
    #[must_use]
    pub const fn is_enumerated(&self) -> bool {
        matches!(self, Self::Select | Self::Radio | Self::Checkbox)
    }
}
