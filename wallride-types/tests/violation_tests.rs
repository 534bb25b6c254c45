use wallride_types::{describe, Error, FieldId, FieldKey, Language, Violation, ViolationKind};

// ── Language ─────────────────────────────────────────────────────

#[test]
fn language_is_trimmed() {
    let lang = Language::new("  en ").unwrap();
    assert_eq!(lang.as_str(), "en");
    assert_eq!(lang.to_string(), "en");
}

#[test]
fn language_rejects_blank() {
    assert!(matches!(Language::new(""), Err(Error::InvalidLanguage(_))));
    assert!(matches!(Language::new("   "), Err(Error::InvalidLanguage(_))));
}

#[test]
fn language_is_opaque() {
    // No registry check, anything non-blank is accepted.
    assert!(Language::new("x-klingon").is_ok());
}

#[test]
fn language_serde_is_plain_string() {
    let lang: Language = "ja".parse().unwrap();
    assert_eq!(serde_json::to_string(&lang).unwrap(), "\"ja\"");
    let parsed: Language = serde_json::from_str("\"ja\"").unwrap();
    assert_eq!(parsed, lang);
}

#[test]
fn language_deserialize_rejects_blank() {
    assert!(serde_json::from_str::<Language>("\"  \"").is_err());
}

// ── Violation ────────────────────────────────────────────────────

#[test]
fn not_found_violation_targets_field() {
    let v = Violation::not_found(FieldId::new(5));
    assert_eq!(v.kind, ViolationKind::NotFound);
    assert!(v.is_for_field(FieldId::new(5)));
    assert!(!v.is_for_field(FieldId::new(6)));
}

#[test]
fn required_violation_targets_property() {
    let v = Violation::required("title");
    assert_eq!(v.kind, ViolationKind::Required);
    assert!(v.is_for_property("title"));
    assert!(!v.is_for_property("body"));
    assert_eq!(v.to_string(), "title: title is required");
}

#[test]
fn invalid_value_display_names_field() {
    let v = Violation::invalid_value(FieldKey::Id(FieldId::new(1)), "not a number");
    assert_eq!(v.to_string(), "field 1: not a number");
}

#[test]
fn describe_joins_violations() {
    let all = vec![Violation::required("title"), Violation::required("body")];
    assert_eq!(describe(&all), "title: title is required; body: body is required");
    assert_eq!(describe(&[]), "");
}

#[test]
fn violation_serde_shape() {
    let v = Violation::not_found(FieldId::new(3));
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json["key"]["id"], 3);
    assert_eq!(json["kind"], "not_found");
}
