//! Rules that apply to any value.

use serde_json::Value;

/// A value counts as present unless it is absent, `null`, `""` or `[]`.
pub(crate) fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
    }
}

crate::rule! {
    /// Valid when a value is present: not absent, `null`, an empty string or
    /// an empty array. `0`, `false` and `{}` count as present.
    pub Required;
    check(value) { is_present(value) }
    message() { "This field is required" }
    fn required();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), false)]
    #[case(json!(""), false)]
    #[case(json!([]), false)]
    #[case(json!(" "), true)]
    #[case(json!(0), true)]
    #[case(json!(false), true)]
    #[case(json!({}), true)]
    #[case(json!([null]), true)]
    fn required_cases(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(required().check(Some(&value)).is_valid(), expected);
    }

    #[test]
    fn required_rejects_absent() {
        let verdict = required().check(None);
        assert!(!verdict.is_valid());
        assert_eq!(verdict.messages(), ["This field is required"]);
    }
}
