//! Rules on uploaded files.
//!
//! A file is described by a JSON object carrying at least its size in bytes
//! and its MIME type, the way browsers expose a selected file:
//!
//! ```json
//! { "name": "avatar.png", "size": 48213, "type": "image/png" }
//! ```
//!
//! Size and type rules pass when no file is selected; use [`file_required`]
//! to demand one.

use serde_json::Value;

use crate::rules::is_truthy;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

fn file_size(value: Option<&Value>) -> Option<f64> {
    value?.get("size")?.as_f64()
}

fn file_type(value: Option<&Value>) -> Option<&str> {
    value?.get("type")?.as_str()
}

crate::rule! {
    /// Valid when the file is at most `threshold_mb` megabytes. Files without
    /// a size, or with size zero, pass.
    pub ValidSize { threshold_mb: f64 };
    check(self, value) {
        match file_size(value) {
            Some(size) if size != 0.0 => size / BYTES_PER_MB <= self.threshold_mb,
            _ => true,
        }
    }
    message(self) { format!("File size exceeds the {} MB limit", self.threshold_mb) }
    fn valid_size(threshold_mb: f64);
}

crate::rule! {
    /// Valid when no file is selected or its MIME type is one of `types`.
    pub ValidFileType { types: Vec<String> };
    check(self, value) {
        !is_truthy(value)
            || file_type(value).is_some_and(|mime| self.types.iter().any(|t| t == mime))
    }
    message(self) { format!("File must be of type {}", self.types.join(", ")) }
    fn valid_file_type(types: Vec<String>);
}

impl ValidFileType {
    /// Builds the rule from any list of MIME types.
    pub fn of<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(types.into_iter().map(Into::into).collect())
    }
}

crate::rule! {
    /// Valid when a file is selected.
    pub FileRequired;
    check(value) { is_truthy(value) }
    message() { "A file is required" }
    fn file_required();
}
