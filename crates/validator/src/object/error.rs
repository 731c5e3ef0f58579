//! Errors raised when decoding a flattened result tree.

/// A flattened result tree could not be decoded.
///
/// Evaluation itself never fails; this only covers reading back the
/// `_isValid` / `_messages` shape produced by
/// [`ObjectValidationResult::to_json`](crate::object::ObjectValidationResult::to_json).
/// `path` lists the field names from the root to the offending node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ResultShapeError {
    /// The node is not a JSON object.
    #[error("result node at {path:?} is not an object")]
    NotAnObject {
        /// Field path of the node.
        path: Vec<String>,
    },

    /// `_isValid` is missing or not a boolean.
    #[error("result node at {path:?} has no boolean `_isValid`")]
    MissingValidity {
        /// Field path of the node.
        path: Vec<String>,
    },

    /// `_messages` is missing or not an array of strings.
    #[error("result node at {path:?} has no string array `_messages`")]
    InvalidMessages {
        /// Field path of the node.
        path: Vec<String>,
    },
}

impl ResultShapeError {
    /// Returns the field path of the offending node.
    pub fn path(&self) -> &[String] {
        match self {
            Self::NotAnObject { path }
            | Self::MissingValidity { path }
            | Self::InvalidMessages { path } => path,
        }
    }
}
