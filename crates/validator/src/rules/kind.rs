//! Rules on the kind of a value.

use std::fmt;

use serde_json::Value;

// ============================================================================
// VALUE KIND
// ============================================================================

/// The kind of a possibly absent JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// No value at all: a missing field.
    Undefined,
    /// JSON `null`.
    Null,
    /// `true` or `false`.
    Bool,
    /// Any JSON number.
    Number,
    /// A JSON string.
    String,
    /// A JSON array.
    Array,
    /// A JSON object.
    Object,
}

impl ValueKind {
    /// Classifies a value.
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None => Self::Undefined,
            Some(Value::Null) => Self::Null,
            Some(Value::Bool(_)) => Self::Bool,
            Some(Value::Number(_)) => Self::Number,
            Some(Value::String(_)) => Self::String,
            Some(Value::Array(_)) => Self::Array,
            Some(Value::Object(_)) => Self::Object,
        }
    }

    /// Lower-case name used in messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RULES
// ============================================================================

crate::rule! {
    /// Valid when the value is of the given kind.
    pub IsKind { kind: ValueKind };
    check(self, value) { ValueKind::of(value) == self.kind }
    message(self) { format!("Must be of type {}", self.kind) }
    fn is(kind: ValueKind);
}

crate::rule! {
    /// Valid when the value is of any kind but the given one.
    pub IsNotKind { kind: ValueKind };
    check(self, value) { ValueKind::of(value) != self.kind }
    message(self) { format!("Must not be of type {}", self.kind) }
    fn is_not(kind: ValueKind);
}
