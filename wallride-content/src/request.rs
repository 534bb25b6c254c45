//! Validated article creation requests.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;
use wallride_model::AttributeSet;
use wallride_types::{CategoryId, Language, MediaId, PostId, UserId, Violation};

use crate::{ContentError, ContentResult, DelimitedTagParser, TagParser};

/// Search-engine metadata of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
}

/// Whether the request is for a draft or for publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    /// Only the language is required.
    Draft,
    /// Title, body and language are required.
    Published,
}

/// A validated request to create an article.
///
/// Only obtainable through [`ContentCreateRequestBuilder`], so a value of
/// this type always satisfies the rules of its [`ContentStatus`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentCreateRequest {
    status: ContentStatus,
    code: Option<String>,
    cover_id: Option<MediaId>,
    title: Option<String>,
    body: Option<String>,
    author_id: Option<UserId>,
    date: Option<NaiveDateTime>,
    category_ids: BTreeSet<CategoryId>,
    tags: Option<String>,
    related_post_ids: BTreeSet<PostId>,
    seo: Seo,
    custom_field_values: AttributeSet,
    language: Language,
}

impl ContentCreateRequest {
    pub fn builder() -> ContentCreateRequestBuilder {
        ContentCreateRequestBuilder::default()
    }

    pub fn status(&self) -> ContentStatus {
        self.status
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn cover_id(&self) -> Option<MediaId> {
        self.cover_id
    }

    /// Always `Some` for published requests.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Always `Some` for published requests.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn author_id(&self) -> Option<UserId> {
        self.author_id
    }

    pub fn date(&self) -> Option<NaiveDateTime> {
        self.date
    }

    pub fn category_ids(&self) -> &BTreeSet<CategoryId> {
        &self.category_ids
    }

    /// The tag string as the author typed it.
    pub fn tags(&self) -> Option<&str> {
        self.tags.as_deref()
    }

    /// Tag names split with the default comma parser.
    pub fn tag_names(&self) -> Vec<String> {
        self.tag_names_with(&DelimitedTagParser::default())
    }

    pub fn tag_names_with(&self, parser: &dyn TagParser) -> Vec<String> {
        self.tags.as_deref().map(|raw| parser.parse(raw)).unwrap_or_default()
    }

    pub fn related_post_ids(&self) -> &BTreeSet<PostId> {
        &self.related_post_ids
    }

    pub fn seo(&self) -> &Seo {
        &self.seo
    }

    pub fn custom_field_values(&self) -> &AttributeSet {
        &self.custom_field_values
    }

    pub fn language(&self) -> &Language {
        &self.language
    }
}

/// Fluent builder for [`ContentCreateRequest`].
///
/// Blank strings are treated as absent, the way the admin forms trim empty
/// inputs to null.
#[derive(Debug, Clone, Default)]
pub struct ContentCreateRequestBuilder {
    code: Option<String>,
    cover_id: Option<MediaId>,
    title: Option<String>,
    body: Option<String>,
    author_id: Option<UserId>,
    date: Option<NaiveDateTime>,
    category_ids: BTreeSet<CategoryId>,
    tags: Option<String>,
    related_post_ids: BTreeSet<PostId>,
    seo: Seo,
    custom_field_values: AttributeSet,
    language: Option<String>,
}

impl ContentCreateRequestBuilder {
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn cover_id(mut self, cover_id: MediaId) -> Self {
        self.cover_id = Some(cover_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn author_id(mut self, author_id: UserId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn date(mut self, date: NaiveDateTime) -> Self {
        self.date = Some(date);
        self
    }

    /// Replaces the category set.
    pub fn category_ids(mut self, ids: impl IntoIterator<Item = CategoryId>) -> Self {
        self.category_ids = ids.into_iter().collect();
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// Replaces the related-post set.
    pub fn related_post_ids(mut self, ids: impl IntoIterator<Item = PostId>) -> Self {
        self.related_post_ids = ids.into_iter().collect();
        self
    }

    pub fn seo_title(mut self, title: impl Into<String>) -> Self {
        self.seo.title = Some(title.into());
        self
    }

    pub fn seo_description(mut self, description: impl Into<String>) -> Self {
        self.seo.description = Some(description.into());
        self
    }

    pub fn seo_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.seo.keywords = Some(keywords.into());
        self
    }

    pub fn custom_field_values(mut self, values: AttributeSet) -> Self {
        self.custom_field_values = values;
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Builds a request for publishing: title, body and language required.
    pub fn build(self) -> ContentResult<ContentCreateRequest> {
        self.finish(ContentStatus::Published)
            .map_err(|errors| ContentError::ValidationFailed { errors })
    }

    /// Builds a draft request: only the language is required.
    pub fn build_draft(self) -> ContentResult<ContentCreateRequest> {
        self.finish(ContentStatus::Draft)
            .map_err(|errors| ContentError::ValidationFailed { errors })
    }

    /// Validates and constructs, returning every violation on failure.
    pub(crate) fn finish(
        self,
        status: ContentStatus,
    ) -> Result<ContentCreateRequest, Vec<Violation>> {
        let mut errors = Vec::new();

        let title = non_blank(self.title);
        let body = non_blank(self.body);
        if status == ContentStatus::Published {
            if title.is_none() {
                errors.push(Violation::required("title"));
            }
            if body.is_none() {
                errors.push(Violation::required("body"));
            }
        }

        let language = non_blank(self.language).and_then(|tag| Language::new(tag).ok());
        if language.is_none() {
            errors.push(Violation::required("language"));
        }

        let Some(language) = language.filter(|_| errors.is_empty()) else {
            debug!(
                status = ?status,
                failures = errors.len(),
                "content request rejected"
            );
            return Err(errors);
        };

        Ok(ContentCreateRequest {
            status,
            code: non_blank(self.code),
            cover_id: self.cover_id,
            title,
            body,
            author_id: self.author_id,
            date: self.date,
            category_ids: self.category_ids,
            tags: non_blank(self.tags),
            related_post_ids: self.related_post_ids,
            seo: Seo {
                title: non_blank(self.seo.title),
                description: non_blank(self.seo.description),
                keywords: non_blank(self.seo.keywords),
            },
            custom_field_values: self.custom_field_values,
            language,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
