//! Integration tests for the validation engine over full schemas

use std::collections::HashMap;

use settings_forms::{
    EngineConfig, ErrorSink, MemoryStore, SettingsSchema, SettingsStore, ValidationEngine,
};

mod common;
use common::profile_schema;

fn submit(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn single_required_field_scenario() {
    let schema = SettingsSchema::from_value(serde_json::json!({
        "page": "p", "group": "g", "option_name": "o",
        "sections": {
            "s1": {
                "title": "Section",
                "fields": {
                    "name": { "title": "Name", "validation": "required maxlen:10" }
                }
            }
        }
    }))
    .unwrap();

    // empty submission: only the required message
    let mut engine = ValidationEngine::new();
    let mut sink = ErrorSink::new();
    let outcome = engine.validate_all(&schema, &submit(&[("name", "")]), &mut sink);
    assert!(!outcome.is_valid());
    assert_eq!(engine.get_errors(), ["This field is required.".to_string()]);

    // overlong submission: only the maxlen message
    let mut engine = ValidationEngine::new();
    let mut sink = ErrorSink::new();
    let outcome = engine.validate_all(&schema, &submit(&[("name", "ThisIsWayTooLong")]), &mut sink);
    assert!(!outcome.is_valid());
    assert_eq!(engine.get_errors().len(), 1);
    assert!(engine.get_errors()[0].contains("no more than 10"));

    // valid submission
    let mut engine = ValidationEngine::new();
    let mut sink = ErrorSink::new();
    let outcome = engine.validate_all(&schema, &submit(&[("name", "Bob")]), &mut sink);
    assert!(outcome.is_valid());
    assert!(engine.get_errors().is_empty());
    assert_eq!(outcome.accepted["name"], "Bob");
}

#[test]
fn numeric_range_scenario() {
    let schema = profile_schema();

    let mut engine = ValidationEngine::new();
    let mut sink = ErrorSink::new();
    let outcome = engine.validate_all(
        &schema,
        &submit(&[("name", "Bob"), ("age", "-5")]),
        &mut sink,
    );
    assert!(!outcome.is_valid());
    assert_eq!(sink.field_errors("age").len(), 1);
    assert_eq!(sink.field_errors("age")[0].rule, "minval");

    let mut engine = ValidationEngine::new();
    let mut sink = ErrorSink::new();
    let outcome = engine.validate_all(
        &schema,
        &submit(&[("name", "Bob"), ("age", "200")]),
        &mut sink,
    );
    assert!(!outcome.is_valid());
    assert_eq!(sink.field_errors("age")[0].rule, "maxval");

    let mut engine = ValidationEngine::new();
    let mut sink = ErrorSink::new();
    let outcome = engine.validate_all(
        &schema,
        &submit(&[("name", "Bob"), ("age", "42")]),
        &mut sink,
    );
    assert!(outcome.is_valid());
    assert_eq!(outcome.accepted["age"], "42");
}

#[test]
fn website_scenario_prefixes_scheme() {
    let schema = profile_schema();

    let mut engine = ValidationEngine::new();
    let mut sink = ErrorSink::new();
    let outcome = engine.validate_all(
        &schema,
        &submit(&[("name", "Bob"), ("site", "example.com")]),
        &mut sink,
    );
    assert!(outcome.is_valid());
    assert_eq!(outcome.accepted["site"], "http://example.com");

    let mut engine = ValidationEngine::new();
    let mut sink = ErrorSink::new();
    let outcome = engine.validate_all(
        &schema,
        &submit(&[("name", "Bob"), ("site", "not a url")]),
        &mut sink,
    );
    assert!(!outcome.is_valid());
    assert_eq!(sink.field_errors("site")[0].rule, "website");
}

#[test]
fn missing_submitted_keys_default_to_empty_and_all_fields_are_visited() {
    let schema = profile_schema();

    // only "age" is submitted; the required "name" still fails, optional
    // fields skip their format checks, and every field lands in the
    // accepted map or the sink
    let mut engine = ValidationEngine::new();
    let mut sink = ErrorSink::new();
    let outcome = engine.validate_all(&schema, &submit(&[("age", "30")]), &mut sink);

    assert!(!outcome.is_valid());
    assert_eq!(sink.field_errors("name")[0].rule, "required");
    assert!(sink.field_errors("email").is_empty());
    assert!(sink.field_errors("password").is_empty());

    // fields that passed (including blank optional ones) are accepted
    assert_eq!(outcome.accepted["age"], "30");
    assert_eq!(outcome.accepted["email"], "");
    assert!(!outcome.accepted.contains_key("name"));
}

#[test]
fn failing_fields_are_omitted_unless_revert_is_configured() {
    let schema = SettingsSchema::from_value(serde_json::json!({
        "page": "p", "group": "g", "option_name": "o",
        "sections": {
            "s1": {
                "fields": {
                    "count": { "title": "Count", "validation": "required int", "value": "5" }
                }
            }
        }
    }))
    .unwrap();

    let mut engine = ValidationEngine::new();
    let mut sink = ErrorSink::new();
    let outcome = engine.validate_all(&schema, &submit(&[("count", "nope")]), &mut sink);
    assert!(!outcome.is_valid());
    assert!(!outcome.accepted.contains_key("count"));

    // with revert-on-invalid, the prior value is substituted
    let mut engine = ValidationEngine::with_config(EngineConfig {
        revert_on_invalid: true,
        ..EngineConfig::default()
    });
    let mut sink = ErrorSink::new();
    let outcome = engine.validate_all(&schema, &submit(&[("count", "nope")]), &mut sink);
    assert!(!outcome.is_valid());
    assert_eq!(outcome.accepted["count"], "5");
}

#[test]
fn cross_field_errors_are_collected_in_one_pass() {
    let schema = profile_schema();

    let mut engine = ValidationEngine::new();
    let mut sink = ErrorSink::new();
    let outcome = engine.validate_all(
        &schema,
        &submit(&[
            ("name", ""),
            ("email", "not-an-email"),
            ("age", "200"),
        ]),
        &mut sink,
    );

    assert!(!outcome.is_valid());
    // one failure per offending field, all present simultaneously
    let failed: Vec<&str> = sink.iter().map(|(id, _)| id).collect();
    assert_eq!(failed, vec!["name", "email", "age"]);
    assert_eq!(engine.get_errors().len(), 3);
}

#[test]
fn accepted_values_round_trip_through_a_store() {
    let schema = profile_schema();
    let store = MemoryStore::new();

    let mut engine = ValidationEngine::new();
    let mut sink = ErrorSink::new();
    let outcome = engine.validate_all(
        &schema,
        &submit(&[("name", "Ada"), ("age", "36"), ("site", "adalovelace.org")]),
        &mut sink,
    );
    assert!(outcome.is_valid());
    store.write_validated_values(&outcome.accepted).unwrap();

    // a fresh schema for the next request picks the stored values up
    let mut schema = profile_schema();
    schema.load_current_values(&store).unwrap();
    assert_eq!(schema.lookup_field("identity", "name").unwrap().value, "Ada");
    assert_eq!(
        schema.lookup_field("identity", "site").unwrap().value,
        "http://adalovelace.org"
    );
}

#[test]
fn markup_is_stripped_from_accepted_values() {
    let schema = SettingsSchema::from_value(serde_json::json!({
        "page": "p", "group": "g", "option_name": "o",
        "sections": {
            "s1": {
                "fields": {
                    "bio": { "title": "Bio", "type": "textarea", "validation": "striphtml maxlen:20" }
                }
            }
        }
    }))
    .unwrap();

    let mut engine = ValidationEngine::new();
    let mut sink = ErrorSink::new();
    let outcome = engine.validate_all(
        &schema,
        &submit(&[("bio", "<b>hello</b> world")]),
        &mut sink,
    );
    assert!(outcome.is_valid());
    assert_eq!(outcome.accepted["bio"], "hello world");
}
