//! Bundled rules over `serde_json::Value`
//!
//! Each family lives in its own module and is meant to be used qualified,
//! mirroring how form code reads:
//!
//! ```
//! use arbor_validator::object::ObjectValidator;
//! use arbor_validator::rules::{generic, number, string};
//! use serde_json::{Value, json};
//!
//! let mut form = ObjectValidator::<Value>::new();
//! form.on_field("name", generic::required())
//!     .on_field("name", string::has_max_length(50))
//!     .on_field("age", number::is_integer())
//!     .on_field("age", number::min(18.0));
//!
//! let result = form.validate(&json!({"name": "Ada", "age": 36}));
//! assert!(result.is_valid());
//! ```
//!
//! Every rule accepts any value, including an absent one, and resolves values
//! of the wrong kind to an invalid verdict instead of failing. Default
//! messages are plain English and can be replaced with `with_message`.
//!
//! # Families
//!
//! - [`kind`]: [`is`](kind::is), [`is_not`](kind::is_not)
//! - [`generic`]: [`required`](generic::required)
//! - [`string`]: [`is_string`](string::is_string),
//!   [`has_min_length`](string::has_min_length),
//!   [`has_max_length`](string::has_max_length),
//!   [`valid_regex`](string::valid_regex), [`is_url`](string::is_url)
//! - [`number`]: [`is_decimal`](number::is_decimal),
//!   [`is_integer`](number::is_integer), [`min`](number::min),
//!   [`max`](number::max)
//! - [`list`]: [`not_empty`](list::not_empty)
//! - [`file`]: [`valid_size`](file::valid_size),
//!   [`valid_file_type`](file::valid_file_type),
//!   [`file_required`](file::file_required)

use serde_json::Value;

pub mod file;
pub mod generic;
pub mod kind;
pub mod list;
pub mod number;
pub mod string;

pub use file::{FileRequired, ValidFileType, ValidSize};
pub use generic::Required;
pub use kind::{IsKind, IsNotKind, ValueKind};
pub use list::NotEmpty;
pub use number::{IsDecimal, IsInteger, Max, Min};
pub use string::{HasMaxLength, HasMinLength, IsString, IsUrl, ValidRegex};

/// Truthiness of a possibly absent JSON value.
///
/// Absent, `null`, `false`, `0` and `""` are falsy; everything else,
/// including empty arrays and objects, is truthy.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}
