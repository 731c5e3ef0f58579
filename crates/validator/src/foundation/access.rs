//! Field lookup used while descending into nested values.

use serde_json::Value;

/// Extracts a named field from a value of the same type.
///
/// Evaluation walks the validator tree and the value in lock-step through this
/// trait. A missing field, or a value that has no fields at all, yields `None`
/// and the child validator sees an absent value.
pub trait FieldAccess {
    /// Returns the field called `name`, if the value has one.
    fn field(&self, name: &str) -> Option<&Self>;
}

impl FieldAccess for Value {
    /// Objects are looked up by key. Arrays accept a canonical decimal index
    /// (`"0"`, `"12"`, not `"01"` or `"+1"`). Every other variant, `null`
    /// included, has no fields.
    fn field(&self, name: &str) -> Option<&Self> {
        match self {
            Value::Object(map) => map.get(name),
            Value::Array(items) => array_index(name).and_then(|index| items.get(index)),
            _ => None,
        }
    }
}

fn array_index(name: &str) -> Option<usize> {
    let index = name.parse::<usize>().ok()?;
    (index.to_string() == name).then_some(index)
}
