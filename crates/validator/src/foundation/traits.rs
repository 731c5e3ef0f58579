//! The rule contract.

use crate::foundation::Verdict;

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A pure predicate over a value, producing a [`Verdict`].
///
/// `None` stands for an absent value: a field that does not exist, or a field
/// of a parent that is itself missing. Rules must handle it, along with any
/// value of an unexpected kind, by returning a verdict. They never panic and
/// never mutate the value.
///
/// Any `Fn(Option<&V>) -> Verdict` closure that is `Send + Sync` is a rule:
///
/// ```
/// use arbor_validator::foundation::{Rule, Verdict};
/// use serde_json::{Value, json};
///
/// let non_null = |value: Option<&Value>| {
///     Verdict::new(!matches!(value, None | Some(Value::Null)), vec!["Must be set".into()])
/// };
///
/// assert!(non_null.check(Some(&json!(1))).is_valid());
/// assert!(!non_null.check(None).is_valid());
/// ```
pub trait Rule<V>: Send + Sync {
    /// Checks the value.
    fn check(&self, value: Option<&V>) -> Verdict;
}

impl<V, F> Rule<V> for F
where
    F: Fn(Option<&V>) -> Verdict + Send + Sync,
{
    #[inline]
    fn check(&self, value: Option<&V>) -> Verdict {
        self(value)
    }
}
