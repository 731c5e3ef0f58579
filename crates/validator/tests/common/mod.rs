//! Rules shared by the integration tests.

#![allow(dead_code)]

use arbor_validator::foundation::Verdict;
use serde_json::Value;

pub const MESSAGE: &str = "validValidator";

/// Passes, but still carries a message.
pub fn true_rule(_value: Option<&Value>) -> Verdict {
    Verdict::new(true, vec![MESSAGE.into()])
}

/// Always fails.
pub fn false_rule(_value: Option<&Value>) -> Verdict {
    Verdict::new(false, vec![MESSAGE.into()])
}

/// Passes when the value equals `expected`.
pub fn equal_rule(expected: Value) -> impl Fn(Option<&Value>) -> Verdict + Send + Sync + 'static {
    move |value: Option<&Value>| Verdict::new(value == Some(&expected), vec![MESSAGE.into()])
}
