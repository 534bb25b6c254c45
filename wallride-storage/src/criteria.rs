use serde::{Deserialize, Serialize};
use wallride_model::{FieldDefinition, FieldType};
use wallride_types::Language;

/// Filters for a custom field search.
///
/// All filters are optional and combine with AND. An empty criteria
/// matches every definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    /// Whitespace-separated terms; each must appear (case-insensitive) in
    /// the name, code or description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Keeps definitions for this language plus language-neutral ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Keeps only these types. Empty means any type.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub field_types: Vec<FieldType>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_field_types(mut self, field_types: impl IntoIterator<Item = FieldType>) -> Self {
        self.field_types = field_types.into_iter().collect();
        self
    }

    /// Returns true if `field` passes every filter.
    pub fn matches(&self, field: &FieldDefinition) -> bool {
        self.matches_language(field) && self.matches_type(field) && self.matches_keyword(field)
    }

    fn matches_language(&self, field: &FieldDefinition) -> bool {
        self.language.as_ref().is_none_or(|l| field.applies_to(l))
    }

    fn matches_type(&self, field: &FieldDefinition) -> bool {
        self.field_types.is_empty() || self.field_types.contains(&field.field_type)
    }

    fn matches_keyword(&self, field: &FieldDefinition) -> bool {
        let Some(keyword) = self.keyword.as_deref() else {
            return true;
        };
        let haystack = [
            Some(field.name.as_str()),
            field.code.as_deref(),
            field.description.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::to_lowercase)
        .collect::<Vec<_>>();

        keyword
            .split_whitespace()
            .map(str::to_lowercase)
            .all(|term| haystack.iter().any(|h| h.contains(&term)))
    }
}
