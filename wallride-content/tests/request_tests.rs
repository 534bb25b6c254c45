use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use wallride_content::{
    ContentCreateRequest, ContentError, ContentStatus, DelimitedTagParser, TagParser,
};
use wallride_model::{AttributeSet, AttributeValue, FieldValue};
use wallride_types::{CategoryId, FieldId, MediaId, PostId, UserId, ViolationKind};

fn violations(err: ContentError) -> Vec<wallride_types::Violation> {
    match err {
        ContentError::ValidationFailed { errors } => errors,
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

// ── Builder: success ─────────────────────────────────────────────

#[test]
fn build_with_every_field() {
    let cover = MediaId::new();
    let date = NaiveDate::from_ymd_opt(2015, 6, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap();
    let mut values = AttributeSet::new();
    values
        .insert(AttributeValue::new(FieldId::new(1), FieldValue::Number(3.0)))
        .unwrap();

    let request = ContentCreateRequest::builder()
        .code("hello-world")
        .cover_id(cover)
        .title("Hello")
        .body("<p>World</p>")
        .author_id(UserId::new(5))
        .date(date)
        .category_ids([CategoryId::new(2), CategoryId::new(1)])
        .tags("news, rust")
        .related_post_ids([PostId::new(10)])
        .seo_title("Hello | Blog")
        .seo_description("A greeting")
        .seo_keywords("hello")
        .custom_field_values(values.clone())
        .language("en")
        .build()
        .unwrap();

    assert_eq!(request.status(), ContentStatus::Published);
    assert_eq!(request.code(), Some("hello-world"));
    assert_eq!(request.cover_id(), Some(cover));
    assert_eq!(request.title(), Some("Hello"));
    assert_eq!(request.body(), Some("<p>World</p>"));
    assert_eq!(request.author_id(), Some(UserId::new(5)));
    assert_eq!(request.date(), Some(date));
    assert_eq!(
        request.category_ids(),
        &BTreeSet::from([CategoryId::new(1), CategoryId::new(2)])
    );
    assert_eq!(request.related_post_ids(), &BTreeSet::from([PostId::new(10)]));
    assert_eq!(request.seo().title.as_deref(), Some("Hello | Blog"));
    assert_eq!(request.seo().description.as_deref(), Some("A greeting"));
    assert_eq!(request.seo().keywords.as_deref(), Some("hello"));
    assert_eq!(request.custom_field_values(), &values);
    assert_eq!(request.language().as_str(), "en");
}

#[test]
fn optional_fields_default_to_empty() {
    let request = ContentCreateRequest::builder()
        .title("t")
        .body("b")
        .language("ja")
        .build()
        .unwrap();
    assert_eq!(request.code(), None);
    assert_eq!(request.cover_id(), None);
    assert!(request.category_ids().is_empty());
    assert!(request.custom_field_values().is_empty());
    assert!(request.tag_names().is_empty());
}

#[test]
fn blank_optional_strings_become_none() {
    let request = ContentCreateRequest::builder()
        .title("t")
        .body("b")
        .code("  ")
        .seo_title("")
        .tags(" ")
        .language("en")
        .build()
        .unwrap();
    assert_eq!(request.code(), None);
    assert_eq!(request.seo().title, None);
    assert_eq!(request.tags(), None);
}

#[test]
fn language_is_trimmed() {
    let request = ContentCreateRequest::builder()
        .title("t")
        .body("b")
        .language(" en ")
        .build()
        .unwrap();
    assert_eq!(request.language().as_str(), "en");
}

// ── Builder: validation ──────────────────────────────────────────

#[test]
fn missing_title_fails_with_title_violation() {
    let err = ContentCreateRequest::builder()
        .body("b")
        .language("en")
        .build()
        .unwrap_err();
    let errs = violations(err);
    assert_eq!(errs.len(), 1);
    assert!(errs[0].is_for_property("title"));
    assert_eq!(errs[0].kind, ViolationKind::Required);
}

#[test]
fn all_missing_required_fields_are_reported_together() {
    let errs = violations(ContentCreateRequest::builder().build().unwrap_err());
    let names: Vec<String> = errs.iter().map(|v| v.key.to_string()).collect();
    assert_eq!(names, vec!["title", "body", "language"]);
}

#[test]
fn blank_required_fields_count_as_missing() {
    let errs = violations(
        ContentCreateRequest::builder()
            .title("   ")
            .body("b")
            .language("")
            .build()
            .unwrap_err(),
    );
    assert!(errs.iter().any(|v| v.is_for_property("title")));
    assert!(errs.iter().any(|v| v.is_for_property("language")));
    assert!(!errs.iter().any(|v| v.is_for_property("body")));
}

#[test]
fn error_message_lists_every_violation() {
    let err = ContentCreateRequest::builder().language("en").build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "validation failed: title: title is required; body: body is required"
    );
}

// ── Drafts ───────────────────────────────────────────────────────

#[test]
fn draft_needs_only_language() {
    let request = ContentCreateRequest::builder()
        .language("en")
        .build_draft()
        .unwrap();
    assert_eq!(request.status(), ContentStatus::Draft);
    assert_eq!(request.title(), None);
    assert_eq!(request.body(), None);
}

#[test]
fn draft_without_language_fails() {
    let errs = violations(
        ContentCreateRequest::builder()
            .title("t")
            .build_draft()
            .unwrap_err(),
    );
    assert_eq!(errs.len(), 1);
    assert!(errs[0].is_for_property("language"));
}

// ── Tags ─────────────────────────────────────────────────────────

#[test]
fn tag_names_split_on_commas() {
    let request = ContentCreateRequest::builder()
        .title("t")
        .body("b")
        .tags("Rust, web development,, rust ,CMS")
        .language("en")
        .build()
        .unwrap();
    assert_eq!(request.tags(), Some("Rust, web development,, rust ,CMS"));
    assert_eq!(request.tag_names(), vec!["Rust", "web development", "CMS"]);
}

#[test]
fn tag_names_with_custom_parser() {
    let request = ContentCreateRequest::builder()
        .title("t")
        .body("b")
        .tags("a b,c")
        .language("en")
        .build()
        .unwrap();
    let parser = DelimitedTagParser::new([',', ' ']);
    assert_eq!(request.tag_names_with(&parser), vec!["a", "b", "c"]);
}

#[test]
fn delimited_parser_edge_cases() {
    let parser = DelimitedTagParser::default();
    assert!(parser.parse("").is_empty());
    assert!(parser.parse(" , ,").is_empty());
    assert_eq!(parser.parse("one"), vec!["one"]);
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn request_serializes_for_the_web_layer() {
    let request = ContentCreateRequest::builder()
        .title("t")
        .body("b")
        .category_ids([CategoryId::new(3)])
        .language("en")
        .build()
        .unwrap();
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["status"], "published");
    assert_eq!(json["title"], "t");
    assert_eq!(json["category_ids"], serde_json::json!([3]));
    assert_eq!(json["language"], "en");
    assert_eq!(json["custom_field_values"], serde_json::json!([]));
}
