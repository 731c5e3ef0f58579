//! What can be attached to a field: a single rule or a whole sub-validator.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{Rule, Verdict};
use crate::object::ObjectValidator;

/// Argument of [`ObjectValidator::on_field`].
///
/// A `Rule` is appended to the field's own rules; a `Node` is merged into the
/// field's validator with [`ObjectValidator::add_all`].
pub enum FieldRule<V> {
    /// A single rule for the field value.
    Rule(Arc<dyn Rule<V>>),
    /// A validator tree for the field value.
    Node(ObjectValidator<V>),
}

impl<V> FieldRule<V> {
    /// Wraps a rule.
    pub fn rule<R>(rule: R) -> Self
    where
        R: Rule<V> + 'static,
    {
        Self::Rule(Arc::new(rule))
    }

    /// Wraps a validator tree.
    pub fn node(validator: ObjectValidator<V>) -> Self {
        Self::Node(validator)
    }
}

impl<V> fmt::Debug for FieldRule<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(_) => f.write_str("FieldRule::Rule(<rule>)"),
            Self::Node(node) => f.debug_tuple("FieldRule::Node").field(node).finish(),
        }
    }
}

// ============================================================================
// CONVERSION
// ============================================================================

/// Conversion into a [`FieldRule`].
///
/// Implemented for rule closures and functions, for every rule declared with
/// [`rule!`](crate::rule), for [`ObjectValidator`], and for `FieldRule`
/// itself, so `on_field` accepts any of them directly.
///
/// A hand-written [`Rule`] struct either implements this trait with
/// [`FieldRule::rule`] or is wrapped at the call site:
///
/// ```
/// use arbor_validator::foundation::{Rule, Verdict};
/// use arbor_validator::object::{FieldRule, IntoFieldRule, ObjectValidator};
/// use serde_json::{Value, json};
///
/// struct NonZero;
///
/// impl Rule<Value> for NonZero {
///     fn check(&self, value: Option<&Value>) -> Verdict {
///         let ok = value.and_then(Value::as_f64).is_some_and(|n| n != 0.0);
///         Verdict::new(ok, vec!["Must not be zero".into()])
///     }
/// }
///
/// impl IntoFieldRule<Value> for NonZero {
///     fn into_field_rule(self) -> FieldRule<Value> {
///         FieldRule::rule(self)
///     }
/// }
///
/// let mut validator = ObjectValidator::<Value>::new();
/// validator.on_field("count", NonZero);
/// assert!(!validator.validate(&json!({"count": 0})).is_valid());
/// ```
pub trait IntoFieldRule<V> {
    /// Performs the conversion.
    fn into_field_rule(self) -> FieldRule<V>;
}

impl<V, F> IntoFieldRule<V> for F
where
    F: Fn(Option<&V>) -> Verdict + Send + Sync + 'static,
{
    fn into_field_rule(self) -> FieldRule<V> {
        FieldRule::rule(self)
    }
}

impl<V> IntoFieldRule<V> for ObjectValidator<V> {
    fn into_field_rule(self) -> FieldRule<V> {
        FieldRule::Node(self)
    }
}

impl<V> IntoFieldRule<V> for FieldRule<V> {
    fn into_field_rule(self) -> FieldRule<V> {
        self
    }
}
