//! Bundled rules wired into validator trees.

use arbor_validator::prelude::*;
use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::rstest;
use serde_json::{Value, json};

fn signup_form() -> ObjectValidator<Value> {
    let postcode = Regex::new(r"^\d{4,5}$").unwrap();

    let address = ObjectValidator::new()
        .with_field("city", generic::required())
        .with_field("postcode", string::valid_regex(postcode));

    let mut form = ObjectValidator::new();
    form.on(kind::is(ValueKind::Object))
        .on_field("username", generic::required())
        .on_field("username", string::has_min_length(2))
        .on_field("username", string::has_max_length(21))
        .on_field("website", string::is_url())
        .on_field("age", number::is_integer())
        .on_field("age", number::min(18.0))
        .on_field("tags", list::not_empty())
        .on_field("avatar", file::valid_size(2.0))
        .on_field(
            "avatar",
            file::ValidFileType::of(["image/png", "image/jpeg"]),
        )
        .on_field("address", address);
    form
}

fn valid_signup() -> Value {
    json!({
        "username": "ada",
        "website": "https://ada.dev",
        "age": 36,
        "tags": ["math"],
        "avatar": {"name": "ada.png", "size": 48213, "type": "image/png"},
        "address": {"city": "London", "postcode": "12345"}
    })
}

#[test]
fn complete_signup_is_valid() {
    let result = signup_form().validate(&valid_signup());
    assert!(result.is_valid(), "{:#}", result.to_json());
    assert!(result.errors().is_empty());
}

#[test]
fn every_failing_field_is_reported() {
    let result = signup_form().validate(&json!({
        "username": "a",
        "website": "ada.dev",
        "age": "17.5",
        "tags": [],
        "avatar": {"name": "ada.gif", "size": 3 * 1024 * 1024, "type": "image/gif"},
        "address": {"city": "", "postcode": "12"}
    }));

    assert!(!result.is_valid());
    let failing: Vec<String> = result
        .errors()
        .into_iter()
        .map(|(path, _)| path.join("."))
        .collect();
    assert_eq!(
        failing,
        [
            "username",
            "website",
            "age",
            "tags",
            "avatar",
            "address.city",
            "address.postcode",
        ]
    );
}

#[test]
fn field_messages_start_at_the_first_failure() {
    let result = signup_form().validate(&json!({"username": "", "age": 12}));

    assert_eq!(
        result.field("username").unwrap().messages(),
        [
            "This field is required",
            "Must contain at least 3 characters",
            "Must contain at most 20 characters",
        ]
    );
    assert_eq!(result.field("age").unwrap().messages(), ["Must be at least 18"]);
}

#[test]
fn passing_rules_after_a_failure_add_their_messages() {
    let mut validator = ObjectValidator::<Value>::new();
    validator
        .on_field("name", string::has_min_length(10))
        .on_field("name", string::is_string());

    let result = validator.validate(&json!({"name": "ada"}));
    let name = result.field("name").unwrap();
    assert!(!name.is_valid());
    assert_eq!(
        name.messages(),
        ["Must contain at least 11 characters", "Must be text"]
    );
}

#[test]
fn non_object_form_fails_its_own_kind_rule() {
    let result = signup_form().validate(&json!("not a form"));
    assert!(!result.is_valid());
    assert_eq!(result.messages(), ["Must be of type object"]);
}

#[test]
fn custom_messages_replace_defaults() {
    let mut validator = ObjectValidator::<Value>::new();
    validator.on_field(
        "name",
        generic::required().with_messages(["Name is required", "Please fill it in"]),
    );

    let result = validator.validate(&json!({}));
    assert_eq!(
        result.field("name").unwrap().messages(),
        ["Name is required", "Please fill it in"]
    );
}

#[rstest]
#[case::present(json!({"type": "image/png", "size": 10}), true)]
#[case::missing(Value::Null, false)]
#[case::empty_string(json!(""), false)]
fn file_required_in_a_form(#[case] avatar: Value, #[case] expected: bool) {
    let mut validator = ObjectValidator::<Value>::new();
    validator.on_field("avatar", file::file_required());

    let result = validator.validate(&json!({"avatar": avatar}));
    assert_eq!(result.is_valid(), expected);
}

#[test]
fn report_survives_json_round_trip() {
    let result = signup_form().validate(&json!({"username": "a", "address": {}}));

    let json = result.to_json();
    let decoded = ObjectValidationResult::from_json(&json).unwrap();
    assert_eq!(decoded, result);

    let text = serde_json::to_string(&result).unwrap();
    let parsed: ObjectValidationResult = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn malformed_report_names_the_bad_node() {
    let err = ObjectValidationResult::from_json(&json!({
        "_isValid": false,
        "_messages": [],
        "address": {"city": {"_messages": []}, "_isValid": false, "_messages": []}
    }))
    .unwrap_err();

    assert!(matches!(err, ResultShapeError::MissingValidity { .. }));
    assert_eq!(err.path(), ["address", "city"]);
}
