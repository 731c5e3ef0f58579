//! The validator node: self-rules plus per-field sub-validators.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::foundation::{FieldAccess, Rule, Verdict};
use crate::object::{FieldRule, IntoFieldRule, ObjectValidationResult};

// ============================================================================
// OBJECT VALIDATOR
// ============================================================================

/// A composable validator for one level of a value tree.
///
/// Holds rules for the value itself and, per field name, a child validator
/// for that field's value. Children form a tree shaped like the data being
/// checked.
///
/// Composition mutates in place and returns `&mut Self` for chaining.
/// Merging and cloning copy the tree structure, so a validator never shares
/// mutable state with another one; rules themselves are immutable and are
/// shared behind [`Arc`].
///
/// # Examples
///
/// ```
/// use arbor_validator::foundation::Verdict;
/// use arbor_validator::object::ObjectValidator;
/// use serde_json::{Value, json};
///
/// let not_blank = |value: Option<&Value>| {
///     let ok = value.and_then(Value::as_str).is_some_and(|s| !s.trim().is_empty());
///     Verdict::new(ok, vec!["Must not be blank".into()])
/// };
///
/// let mut user = ObjectValidator::<Value>::new();
/// user.on_field("name", not_blank)
///     .on_field("address", ObjectValidator::new().with_field("city", not_blank));
///
/// let result = user.validate(&json!({"name": "Ada", "address": {}}));
/// assert!(!result.is_valid());
/// assert!(result.at(["address", "city"]).is_some_and(|city| !city.is_valid()));
/// ```
pub struct ObjectValidator<V> {
    self_rules: Vec<Arc<dyn Rule<V>>>,
    fields: IndexMap<String, ObjectValidator<V>>,
}

impl<V> ObjectValidator<V> {
    /// Creates an empty validator. It accepts every value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            self_rules: Vec::new(),
            fields: IndexMap::new(),
        }
    }

    // ========================================================================
    // COMPOSITION
    // ========================================================================

    /// Adds a rule for the value itself.
    pub fn on<R>(&mut self, rule: R) -> &mut Self
    where
        R: Rule<V> + 'static,
    {
        self.self_rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule or a whole sub-validator for the field `name`.
    ///
    /// The field's validator is created on first use. A rule is appended to
    /// its own rules; a validator is merged into it with [`add_all`], never
    /// stored by reference.
    ///
    /// [`add_all`]: ObjectValidator::add_all
    pub fn on_field(&mut self, name: impl Into<String>, rule: impl IntoFieldRule<V>) -> &mut Self {
        let child = self.fields.entry(name.into()).or_default();
        match rule.into_field_rule() {
            FieldRule::Rule(rule) => child.self_rules.push(rule),
            FieldRule::Node(node) => {
                child.add_all(&node);
            }
        }
        self
    }

    /// Merges every rule of `other` into this validator.
    ///
    /// `other`'s self-rules are appended after ours, and each of its fields is
    /// merged recursively into our validator for the same field. Later
    /// changes to `other` do not affect `self`.
    pub fn add_all(&mut self, other: &ObjectValidator<V>) -> &mut Self {
        tracing::debug!(
            rules = other.self_rules.len(),
            fields = other.fields.len(),
            "merging validator"
        );

        self.self_rules.extend(other.self_rules.iter().cloned());
        for (name, child) in &other.fields {
            self.fields.entry(name.clone()).or_default().add_all(child);
        }
        self
    }

    /// Returns an independent copy of the validator for `name`, or an empty
    /// validator when the field has none.
    ///
    /// Changing the returned validator never affects `self`.
    #[must_use]
    pub fn get_for_field(&self, name: &str) -> ObjectValidator<V> {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// Owned form of [`on`](ObjectValidator::on), for building sub-validators
    /// inline.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<R>(mut self, rule: R) -> Self
    where
        R: Rule<V> + 'static,
    {
        self.on(rule);
        self
    }

    /// Owned form of [`on_field`](ObjectValidator::on_field).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, name: impl Into<String>, rule: impl IntoFieldRule<V>) -> Self {
        self.on_field(name, rule);
        self
    }

    // ========================================================================
    // INTROSPECTION
    // ========================================================================

    /// Returns `true` if the validator has no rules and no fields.
    pub fn is_empty(&self) -> bool {
        self.self_rules.is_empty() && self.fields.is_empty()
    }

    /// Number of rules for the value itself.
    pub fn rule_count(&self) -> usize {
        self.self_rules.len()
    }

    /// Registered field names in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns `true` if a validator is registered for `name`.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    // ========================================================================
    // EVALUATION
    // ========================================================================

    /// Folds this node's own rules over `value`.
    ///
    /// Every rule runs. See [`Verdict::aggregate`] for how messages combine.
    pub fn self_verdict(&self, value: Option<&V>) -> Verdict {
        Verdict::aggregate(self.self_rules.iter().map(|rule| rule.check(value)))
    }
}

impl<V: FieldAccess> ObjectValidator<V> {
    /// Evaluates the whole tree against a possibly absent value.
    ///
    /// Field validators receive `value`'s field of the same name, or `None`
    /// when `value` is absent or lacks it. Every rule and every field is
    /// evaluated; a failing field marks all its ancestors as failing.
    pub fn evaluate(&self, value: Option<&V>) -> ObjectValidationResult {
        let mut result = ObjectValidationResult::from_verdict(self.self_verdict(value));

        for (name, child) in &self.fields {
            let field_value = value.and_then(|v| v.field(name));
            result.attach(name.clone(), child.evaluate(field_value));
        }

        tracing::trace!(
            rules = self.self_rules.len(),
            fields = self.fields.len(),
            is_valid = result.is_valid(),
            "evaluated validator node"
        );

        result
    }

    /// Evaluates the whole tree against a present value.
    pub fn validate(&self, value: &V) -> ObjectValidationResult {
        self.evaluate(Some(value))
    }
}

impl<V> Default for ObjectValidator<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for ObjectValidator<V> {
    /// Deep copy: equivalent to merging `self` into an empty validator.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.add_all(self);
        copy
    }
}

impl<V> fmt::Debug for ObjectValidator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValidator")
            .field("rules", &self.self_rules.len())
            .field("fields", &self.fields)
            .finish()
    }
}
