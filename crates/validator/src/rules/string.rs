//! String rules.
//!
//! Length is counted in Unicode scalar values. Every rule here checks that
//! the value is a string first; anything else fails.

use regex::Regex;
use serde_json::Value;

fn as_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}

fn char_count(value: Option<&Value>) -> Option<usize> {
    as_str(value).map(|s| s.chars().count())
}

// ============================================================================
// KIND
// ============================================================================

crate::rule! {
    /// Valid for strings, including the empty string.
    pub IsString;
    check(value) { as_str(value).is_some() }
    message() { "Must be text" }
    fn is_string();
}

// ============================================================================
// LENGTH
// ============================================================================

crate::rule! {
    /// Valid for strings longer than `threshold` characters.
    pub HasMinLength { threshold: usize };
    check(self, value) { char_count(value).is_some_and(|len| self.threshold < len) }
    message(self) {
        format!("Must contain at least {} characters", self.threshold.saturating_add(1))
    }
    fn has_min_length(threshold: usize);
}

crate::rule! {
    /// Valid for strings shorter than `threshold` characters.
    pub HasMaxLength { threshold: usize };
    check(self, value) { char_count(value).is_some_and(|len| len < self.threshold) }
    message(self) {
        format!("Must contain at most {} characters", self.threshold.saturating_sub(1))
    }
    fn has_max_length(threshold: usize);
}

// ============================================================================
// CONTENT
// ============================================================================

crate::rule! {
    /// Valid for strings matched by `regex` anywhere in the text. Anchor the
    /// pattern to require a full match.
    pub ValidRegex { regex: Regex };
    check(self, value) { as_str(value).is_some_and(|s| self.regex.is_match(s)) }
    message(self) { "Invalid format" }
    fn valid_regex(regex: Regex);
}

crate::rule! {
    /// Valid for strings starting with `http://`, `https://` or `www.`.
    pub IsUrl;
    check(value) {
        as_str(value).is_some_and(|s| {
            s.starts_with("http://") || s.starts_with("https://") || s.starts_with("www.")
        })
    }
    message() { "Invalid URL" }
    fn is_url();
}
