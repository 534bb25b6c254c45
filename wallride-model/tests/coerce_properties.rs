//! Property-based tests for value coercion.
//!
//! - Select/radio coercion succeeds exactly when the input is an option,
//!   including blank, padded and arbitrary input
//! - Blank input is rejected for every non-text type
//! - Text coercion is idempotent on already-trimmed input
//! - Number and date values survive render → coerce unchanged

use chrono::NaiveDate;
use proptest::prelude::*;
use std::collections::BTreeMap;
use wallride_model::{coerce, FieldDefinition, FieldValue, ValueCoercer};
use wallride_types::FieldId;

fn option_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}").unwrap()
}

fn options_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(option_strategy(), 1..6).prop_map(|s| s.into_iter().collect())
}

/// Options plus a raw value that is sometimes an option, sometimes blank,
/// sometimes an option with whitespace around it, and sometimes anything.
fn select_input_strategy() -> impl Strategy<Value = (Vec<String>, String)> {
    options_strategy().prop_flat_map(|options| {
        let picked = prop::sample::select(options.clone());
        let raw = prop_oneof![
            Just(String::new()),
            Just(" ".to_string()),
            picked.clone(),
            picked.prop_map(|o| format!(" {o} ")),
            any::<String>(),
        ];
        (Just(options), raw)
    })
}

fn blank_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\n]{0,4}").unwrap()
}

fn normalized_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9]([a-zA-Z0-9 ,.]{0,40}[a-zA-Z0-9])?").unwrap()
}

proptest! {
    #[test]
    fn select_succeeds_iff_member((options, raw) in select_input_strategy()) {
        let field = FieldDefinition::select(1, "Choice", options.clone());
        let result = coerce(&field, &raw);
        prop_assert_eq!(result.is_ok(), options.contains(&raw));
    }

    #[test]
    fn blank_non_text_input_is_rejected(options in options_strategy(), raw in blank_strategy()) {
        let fields = [
            FieldDefinition::number(1, "n"),
            FieldDefinition::date(2, "d"),
            FieldDefinition::datetime(3, "dt"),
            FieldDefinition::select(4, "s", options.clone()),
            FieldDefinition::radio(5, "r", options.clone()),
            FieldDefinition::checkbox(6, "c", options),
        ];
        for field in &fields {
            prop_assert!(coerce(field, &raw).is_err(), "{:?} accepted blank input", field.field_type);
        }
        let text = coerce(&FieldDefinition::text(7, "t"), &raw).unwrap().value;
        prop_assert_eq!(text, FieldValue::String(String::new()));
    }

    #[test]
    fn radio_accepts_every_option(options in options_strategy()) {
        let field = FieldDefinition::radio(1, "Choice", options.clone());
        for option in &options {
            let value = coerce(&field, option).unwrap().value;
            prop_assert_eq!(value, FieldValue::String(option.clone()));
        }
    }

    #[test]
    fn text_roundtrip_is_identity(values in prop::collection::vec(normalized_text_strategy(), 1..8)) {
        let fields: Vec<FieldDefinition> = (0..values.len() as i64)
            .map(|i| FieldDefinition::text(i, "t"))
            .collect();
        let raw: BTreeMap<FieldId, String> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (FieldId::new(i as i64), v.clone()))
            .collect();
        let coercer = ValueCoercer::default();
        let set = coercer.build(&fields, &raw).unwrap();
        prop_assert_eq!(set.to_raw_values(&coercer), raw);
    }

    #[test]
    fn number_render_then_coerce_is_stable(n in -1.0e12f64..1.0e12) {
        let field = FieldDefinition::number(1, "n");
        let coercer = ValueCoercer::default();
        let rendered = coercer.render(&FieldValue::Number(n));
        prop_assert_eq!(coercer.coerce(&field, &rendered).unwrap().value, FieldValue::Number(n));
    }

    #[test]
    fn date_render_then_coerce_is_stable(days in 0i64..100_000) {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + chrono::Days::new(days as u64);
        let field = FieldDefinition::date(1, "d");
        let coercer = ValueCoercer::default();
        let rendered = coercer.render(&FieldValue::Date(date));
        prop_assert_eq!(coercer.coerce(&field, &rendered).unwrap().value, FieldValue::Date(date));
    }
}
