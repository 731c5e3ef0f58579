//! Merge, clone and field lookup keep validators independent.

mod common;

use arbor_validator::foundation::Verdict;
use arbor_validator::object::{FieldRule, ObjectValidator};
use common::{false_rule, true_rule};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn sample() -> Value {
    json!({"1": "", "2": ""})
}

// ============================================================================
// CLONE
// ============================================================================

#[test]
fn clone_with_self_rule_evaluates_the_same() {
    let mut validator = ObjectValidator::<Value>::new();
    validator.on(false_rule);

    assert_eq!(
        validator.clone().validate(&sample()),
        validator.validate(&sample())
    );
}

#[test]
fn clone_with_field_rule_evaluates_the_same() {
    let mut validator = ObjectValidator::<Value>::new();
    validator.on_field("1", false_rule);

    assert_eq!(
        validator.clone().validate(&sample()),
        validator.validate(&sample())
    );
}

#[test]
fn changing_original_after_clone_leaves_clone_untouched() {
    let mut original = ObjectValidator::<Value>::new();
    original.on(true_rule).on_field("1", true_rule);
    let clone = original.clone();
    let before = clone.validate(&sample());

    original
        .on(false_rule)
        .on_field("1", false_rule)
        .on_field("2", false_rule);

    assert_eq!(clone.validate(&sample()), before);
    assert!(!original.validate(&sample()).is_valid());
}

// ============================================================================
// MERGE
// ============================================================================

#[test]
fn changing_source_after_merge_leaves_target_untouched() {
    let mut source = ObjectValidator::<Value>::new();
    source.on_field("1", ObjectValidator::new().with_field("deep", true_rule));

    let mut target = ObjectValidator::<Value>::new();
    target.add_all(&source);
    let before = target.validate(&sample());

    source.on(false_rule).on_field("1", false_rule);
    source.on_field("1", ObjectValidator::new().with_field("deep", false_rule));

    assert_eq!(target.validate(&sample()), before);
    assert!(before.is_valid());
}

#[test]
fn changing_sub_validator_after_on_field_leaves_parent_untouched() {
    let mut address = ObjectValidator::<Value>::new();
    address.on_field("city", true_rule);

    let mut user = ObjectValidator::<Value>::new();
    user.on_field("address", address.clone());
    address.on_field("city", false_rule);

    let result = user.validate(&json!({"address": {"city": "Oslo"}}));
    assert!(result.is_valid());
    assert!(!address.validate(&json!({"city": "Oslo"})).is_valid());
}

#[test]
fn merge_keeps_target_rules_first() {
    let first = |_: Option<&Value>| Verdict::invalid("first");
    let second = |_: Option<&Value>| Verdict::invalid("second");

    let mut target = ObjectValidator::<Value>::new();
    target.on(first).on_field("x", first);
    let source = ObjectValidator::new().with(second).with_field("x", second);
    target.add_all(&source);

    let result = target.validate(&json!({}));
    assert_eq!(result.messages(), ["first", "second"]);
    assert_eq!(result.field("x").unwrap().messages(), ["first", "second"]);
}

#[test]
fn merging_a_validator_into_itself_doubles_its_rules() {
    let mut validator = ObjectValidator::<Value>::new();
    validator.on(false_rule).on_field("x", false_rule);

    let copy = validator.clone();
    validator.add_all(&copy);

    assert_eq!(validator.rule_count(), 2);
    assert_eq!(validator.get_for_field("x").rule_count(), 2);
}

#[test]
fn explicit_field_rule_variants() {
    let mut validator = ObjectValidator::<Value>::new();
    validator
        .on_field("a", FieldRule::rule(false_rule))
        .on_field("a", FieldRule::node(ObjectValidator::new().with(true_rule)));

    let result = validator.validate(&json!({"a": 1}));
    assert_eq!(
        result.field("a").unwrap().messages(),
        ["validValidator", "validValidator"]
    );
}

// ============================================================================
// GET FOR FIELD
// ============================================================================

#[test]
fn get_for_field_ignores_parent_self_rules() {
    let mut validator = ObjectValidator::<Value>::new();
    validator.on(false_rule);

    let field_validator = validator.get_for_field("1");
    assert_eq!(
        field_validator.validate(&sample()).to_json(),
        json!({"_isValid": true, "_messages": []})
    );
}

#[test]
fn get_for_field_returns_registered_rules() {
    let mut validator = ObjectValidator::<Value>::new();
    validator.on_field("1", false_rule);

    let field_validator = validator.get_for_field("1");
    assert_eq!(
        field_validator.validate(&sample()).to_json(),
        json!({"_isValid": false, "_messages": ["validValidator"]})
    );
}

#[test]
fn changing_field_copy_leaves_parent_untouched() {
    let mut validator = ObjectValidator::<Value>::new();
    validator.on_field("1", true_rule);

    let mut field_validator = validator.get_for_field("1");
    field_validator.on(false_rule).on_field("nested", false_rule);

    let result = validator.validate(&sample());
    assert_eq!(
        result.to_json(),
        json!({
            "1": {"_isValid": true, "_messages": []},
            "_isValid": true,
            "_messages": []
        })
    );
}

#[test]
fn field_copy_can_seed_another_validator() {
    let mut form = ObjectValidator::<Value>::new();
    form.on_field("email", false_rule);

    let mut profile = ObjectValidator::<Value>::new();
    profile.on_field("contact", form.get_for_field("email"));

    let result = profile.validate(&json!({"contact": "x"}));
    assert!(!result.is_valid());
    assert_eq!(result.field("contact").unwrap().messages(), ["validValidator"]);
}
