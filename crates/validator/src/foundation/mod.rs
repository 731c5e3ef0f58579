//! Core validation types and traits
//!
//! - **Traits**: [`Rule`], [`FieldAccess`]
//! - **Outcomes**: [`Verdict`], [`Message`]
//!
//! A rule is a pure function from an optional value to a [`Verdict`]. The
//! object layer ([`crate::object`]) composes rules into trees and uses
//! [`FieldAccess`] to walk a value alongside them.

pub mod access;
pub mod traits;
pub mod verdict;

pub use access::FieldAccess;
pub use traits::Rule;
pub use verdict::{Message, Verdict};
