//! Prelude module for convenient imports.
//!
//! Provides a single `use arbor_validator::prelude::*;` import that brings in
//! the rule contract, the validator tree, its result, and the rule families
//! as modules (`string::has_min_length(3)`, `number::min(0.0)`, ...).

// ============================================================================
// FOUNDATION: Rule contract
// ============================================================================

pub use crate::foundation::{FieldAccess, Message, Rule, Verdict};

// ============================================================================
// OBJECT: Validator trees and results
// ============================================================================

pub use crate::object::{
    FieldRule, IntoFieldRule, ObjectValidationResult, ObjectValidator, ResultShapeError,
};

// ============================================================================
// RULES-GATED: Bundled rule families
// ============================================================================

#[cfg(feature = "rules")]
pub use crate::rules::{ValueKind, file, generic, kind, list, number, string};
