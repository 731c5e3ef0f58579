//! Rules on arrays.

use serde_json::Value;

use crate::rules::generic::is_present;

crate::rule! {
    /// Valid for a non-empty array. Anything else, absent values included,
    /// fails.
    pub NotEmpty;
    check(value) { is_present(value) && matches!(value, Some(Value::Array(_))) }
    message() { "At least one item is required" }
    fn not_empty();
}
