//! The article create form as submitted by the admin UI.
//!
//! A form is seeded with one value slot per known custom field, filled in
//! with raw strings by the web layer, then turned into a
//! [`ContentCreateRequest`]. Every problem (scalar fields, date, custom
//! fields) comes back in one [`ContentError::ValidationFailed`].
//!
//! Slot values are always checked against the definitions the caller
//! supplies, never against the metadata the client sent back with them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use wallride_model::{AttributeSet, FieldDefinition, FieldError, FieldLookup, FieldType, ValueCoercer};
use wallride_types::{CategoryId, FieldId, FieldKey, MediaId, PostId, UserId, Violation};

use crate::request::ContentStatus;
use crate::{ContentCreateRequest, ContentError, ContentResult};

/// One custom field slot on the form.
///
/// Everything except `custom_field_id` and `value` is a display copy of the
/// definition for rendering the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldValueForm {
    pub custom_field_id: FieldId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default)]
    pub required: bool,
    /// Raw value as typed or selected.
    #[serde(default)]
    pub value: String,
}

impl CustomFieldValueForm {
    /// A slot for `field`, pre-filled with its default value.
    pub fn from_definition(field: &FieldDefinition) -> Self {
        Self {
            custom_field_id: field.id,
            name: field.name.clone(),
            description: field.description.clone(),
            field_type: field.field_type,
            options: field.options.clone(),
            required: field.required,
            value: field.default_value.clone().unwrap_or_default(),
        }
    }
}

/// Raw input for creating an article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleCreateForm {
    pub code: Option<String>,
    pub cover_id: Option<MediaId>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub author_id: Option<UserId>,
    /// Publish date in the date-time form pattern (`yyyy/MM/dd HH:mm`).
    pub date: Option<String>,
    pub category_ids: BTreeSet<CategoryId>,
    pub tags: Option<String>,
    pub related_post_ids: BTreeSet<PostId>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub custom_field_values: Vec<CustomFieldValueForm>,
    pub language: Option<String>,
}

impl ArticleCreateForm {
    /// An empty form with one slot per custom field, in the given order.
    pub fn new(custom_fields: &[FieldDefinition]) -> Self {
        Self {
            custom_field_values: custom_fields
                .iter()
                .map(CustomFieldValueForm::from_definition)
                .collect(),
            ..Self::default()
        }
    }

    pub fn custom_field_value(&self, id: FieldId) -> Option<&CustomFieldValueForm> {
        self.custom_field_values
            .iter()
            .find(|v| v.custom_field_id == id)
    }

    /// Sets the raw value of a slot. Fails if the form has no slot for `id`.
    pub fn set_custom_field_value(&mut self, id: FieldId, raw: impl Into<String>) -> ContentResult<()> {
        let slot = self
            .custom_field_values
            .iter_mut()
            .find(|v| v.custom_field_id == id)
            .ok_or(FieldError::NotFound(id))?;
        slot.value = raw.into();
        Ok(())
    }

    /// Raw slot values keyed by field id.
    pub fn raw_custom_field_values(&self) -> BTreeMap<FieldId, String> {
        self.custom_field_values
            .iter()
            .map(|v| (v.custom_field_id, v.value.clone()))
            .collect()
    }

    /// Validates the form for publishing and builds the request.
    ///
    /// Each slot is coerced against its definition in `fields`; a slot with
    /// no definition there is reported as not found.
    pub fn build_request<L>(&self, fields: &L, coercer: &ValueCoercer) -> ContentResult<ContentCreateRequest>
    where
        L: FieldLookup + ?Sized,
    {
        self.build_as(fields, coercer, ContentStatus::Published)
    }

    /// Validates the form as a draft and builds the request.
    pub fn build_draft_request<L>(
        &self,
        fields: &L,
        coercer: &ValueCoercer,
    ) -> ContentResult<ContentCreateRequest>
    where
        L: FieldLookup + ?Sized,
    {
        self.build_as(fields, coercer, ContentStatus::Draft)
    }

    fn build_as<L>(
        &self,
        fields: &L,
        coercer: &ValueCoercer,
        status: ContentStatus,
    ) -> ContentResult<ContentCreateRequest>
    where
        L: FieldLookup + ?Sized,
    {
        let mut errors = Vec::new();

        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                match NaiveDateTime::parse_from_str(raw, &coercer.config().datetime_format) {
                    Ok(date) => Some(date),
                    Err(e) => {
                        errors.push(Violation::invalid_value(
                            FieldKey::Name("date".to_string()),
                            format!("{raw:?} is not a valid date-time: {e}"),
                        ));
                        None
                    }
                }
            }
        };

        // Slots without a definition stay in the raw map, where assembly
        // reports them as not found.
        let definitions: Vec<FieldDefinition> = self
            .custom_field_values
            .iter()
            .filter_map(|slot| fields.find_field(slot.custom_field_id).cloned())
            .collect();
        let values = coercer
            .assemble(&definitions, &self.raw_custom_field_values())
            .unwrap_or_else(|violations| {
                errors.extend(violations);
                AttributeSet::new()
            });

        let mut builder = ContentCreateRequest::builder()
            .category_ids(self.category_ids.iter().copied())
            .related_post_ids(self.related_post_ids.iter().copied())
            .custom_field_values(values);
        if let Some(code) = &self.code {
            builder = builder.code(code);
        }
        if let Some(cover_id) = self.cover_id {
            builder = builder.cover_id(cover_id);
        }
        if let Some(title) = &self.title {
            builder = builder.title(title);
        }
        if let Some(body) = &self.body {
            builder = builder.body(body);
        }
        if let Some(author_id) = self.author_id {
            builder = builder.author_id(author_id);
        }
        if let Some(date) = date {
            builder = builder.date(date);
        }
        if let Some(tags) = &self.tags {
            builder = builder.tags(tags);
        }
        if let Some(seo_title) = &self.seo_title {
            builder = builder.seo_title(seo_title);
        }
        if let Some(seo_description) = &self.seo_description {
            builder = builder.seo_description(seo_description);
        }
        if let Some(seo_keywords) = &self.seo_keywords {
            builder = builder.seo_keywords(seo_keywords);
        }
        if let Some(language) = &self.language {
            builder = builder.language(language);
        }

        match builder.finish(status) {
            Ok(request) if errors.is_empty() => Ok(request),
            Ok(_) => Err(ContentError::ValidationFailed { errors }),
            Err(mut scalar) => {
                scalar.extend(errors);
                Err(ContentError::ValidationFailed { errors: scalar })
            }
        }
    }
}
