//! Numeric rules.
//!
//! Values may be JSON numbers or numeric strings (form inputs usually arrive
//! as text). Booleans read as `1` and `0`. Falsy values pass the format
//! checks ([`is_decimal`], [`is_integer`]) so an empty optional input is not
//! reported twice; pair them with [`required`](crate::rules::generic::required)
//! when the field is mandatory. The bound checks ([`min`], [`max`]) need a
//! numeric value to compare.

use serde_json::Value;

use crate::rules::generic::is_present;
use crate::rules::is_truthy;

/// Reads a value as a number.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_decimal(s),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// A decimal string: surrounding whitespace allowed, no trailing `.`, finite.
/// Blank strings read as `0`.
fn parse_decimal(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    if s.ends_with('.') {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

pub(crate) fn is_decimal_value(value: Option<&Value>) -> bool {
    !is_truthy(value) || value.and_then(as_number).is_some()
}

fn has_fraction(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f.fract() != 0.0),
        Some(Value::String(s)) => s.contains('.'),
        _ => false,
    }
}

fn bounded(value: Option<&Value>, within: impl Fn(f64) -> bool) -> bool {
    is_present(value) && is_decimal_value(value) && value.and_then(as_number).is_some_and(within)
}

// ============================================================================
// FORMAT
// ============================================================================

crate::rule! {
    /// Valid for numbers, numeric strings, booleans and falsy values.
    pub IsDecimal;
    check(value) { is_decimal_value(value) }
    message() { "Must be a number" }
    fn is_decimal();
}

crate::rule! {
    /// Valid for decimals without a fractional part.
    pub IsInteger;
    check(value) { is_decimal_value(value) && !has_fraction(value) }
    message() { "Must be a whole number" }
    fn is_integer();
}

// ============================================================================
// BOUNDS
// ============================================================================

crate::rule! {
    /// Valid for numeric values greater than or equal to `threshold`.
    ///
    /// Absent values, `null` and `""` fail instead of reading as `0`, so
    /// `min(0.0)` does not accept an empty input. Blank strings such as
    /// `"  "` are present and read as `0`.
    pub Min { threshold: f64 };
    check(self, value) { bounded(value, |n| self.threshold <= n) }
    message(self) { format!("Must be at least {}", self.threshold) }
    fn min(threshold: f64);
}

crate::rule! {
    /// Valid for numeric values less than or equal to `threshold`.
    ///
    /// Like [`Min`], absent values, `null` and `""` fail.
    pub Max { threshold: f64 };
    check(self, value) { bounded(value, |n| n <= self.threshold) }
    message(self) { format!("Must be at most {}", self.threshold) }
    fn max(threshold: f64);
}
