//! # arbor-validator
//!
//! Composable, recursive validation trees for nested values.
//!
//! ## Quick Start
//!
//! ```
//! use arbor_validator::prelude::*;
//! use serde_json::{Value, json};
//!
//! let mut address = ObjectValidator::<Value>::new();
//! address
//!     .on_field("city", generic::required())
//!     .on_field("zip", string::has_min_length(4));
//!
//! let mut user = ObjectValidator::<Value>::new();
//! user.on_field("email", string::is_url().with_message("Enter a website"))
//!     .on_field("address", address);
//!
//! let result = user.validate(&json!({
//!     "email": "https://ada.dev",
//!     "address": { "city": "", "zip": "12345" }
//! }));
//!
//! assert!(!result.is_valid());
//! assert_eq!(
//!     result.to_json()["address"]["city"],
//!     json!({ "_isValid": false, "_messages": ["This field is required"] })
//! );
//! ```
//!
//! ## Building Blocks
//!
//! - [`Rule`](foundation::Rule): a pure check from an optional value to a
//!   [`Verdict`](foundation::Verdict). Closures are rules.
//! - [`ObjectValidator`](object::ObjectValidator): rules for a value plus a
//!   validator per field, merged and cloned by value.
//! - [`ObjectValidationResult`](object::ObjectValidationResult): the report,
//!   shaped like the validator tree, with a flattened `_isValid` /
//!   `_messages` JSON form.
//! - [`rules`]: string, number, list, type, generic and file rules over
//!   `serde_json::Value` (feature `rules`, on by default).
//!
//! Failures are always data. Nothing short-circuits: every rule of every node
//! runs, so one evaluation reports everything that is wrong.

pub mod foundation;
mod macros;
pub mod object;
pub mod prelude;
#[cfg(feature = "rules")]
pub mod rules;

#[doc(hidden)]
pub use serde_json;
