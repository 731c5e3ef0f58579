//! Validator trees for nested values
//!
//! An [`ObjectValidator`] holds rules for a value and, per field name, a
//! child validator for that field. Evaluation walks the validator tree and
//! the value together and produces an [`ObjectValidationResult`] of the same
//! shape as the validator tree.
//!
//! # Composition
//!
//! - [`on`](ObjectValidator::on) adds a rule for the value itself.
//! - [`on_field`](ObjectValidator::on_field) adds a rule, or merges a whole
//!   validator, for one field ([`FieldRule`]).
//! - [`add_all`](ObjectValidator::add_all) merges another validator in.
//! - [`Clone`] and [`get_for_field`](ObjectValidator::get_for_field) hand
//!   out independent copies.
//!
//! # Evaluation
//!
//! Nothing short-circuits: every rule of every node runs so the result is a
//! complete report. A node is valid when its own rules pass and all of its
//! fields are valid.

mod error;
mod field_rule;
mod result;
mod validator;

pub use error::ResultShapeError;
pub use field_rule::{FieldRule, IntoFieldRule};
pub use result::{IS_VALID_KEY, MESSAGES_KEY, ObjectValidationResult};
pub use validator::ObjectValidator;
