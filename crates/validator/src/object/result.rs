//! The result tree produced by [`ObjectValidator::evaluate`].
//!
//! Internally a node is an explicit record: its own verdict plus an ordered
//! map of field results. At the JSON boundary it flattens into the shape
//! consumed by form code:
//!
//! ```json
//! {
//!   "email": { "_isValid": false, "_messages": ["Invalid address"] },
//!   "_isValid": false,
//!   "_messages": []
//! }
//! ```
//!
//! [`ObjectValidator::evaluate`]: crate::object::ObjectValidator::evaluate

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::foundation::{Message, Verdict};
use crate::object::ResultShapeError;

/// Reserved key carrying a node's validity in the flattened form.
pub const IS_VALID_KEY: &str = "_isValid";

/// Reserved key carrying a node's messages in the flattened form.
pub const MESSAGES_KEY: &str = "_messages";

fn is_reserved(key: &str) -> bool {
    key == IS_VALID_KEY || key == MESSAGES_KEY
}

// ============================================================================
// RESULT TREE
// ============================================================================

/// Validation outcome for one node of the validator tree and, recursively,
/// for every field registered on it.
///
/// Field results appear exactly for the registered fields, in registration
/// order, whether or not the validated value had them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectValidationResult {
    is_valid: bool,
    messages: Vec<Message>,
    fields: IndexMap<String, ObjectValidationResult>,
}

impl Default for ObjectValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl ObjectValidationResult {
    /// A passing leaf with no messages and no fields.
    #[must_use]
    pub fn valid() -> Self {
        Self::from_verdict(Verdict::valid())
    }

    /// A leaf carrying the given self-verdict.
    pub fn from_verdict(verdict: Verdict) -> Self {
        Self {
            is_valid: verdict.is_valid(),
            messages: verdict.into_messages(),
            fields: IndexMap::new(),
        }
    }

    /// Attaches a field result. A failing field makes this node fail; a
    /// passing one never restores validity.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, name: impl Into<String>, result: ObjectValidationResult) -> Self {
        self.attach(name.into(), result);
        self
    }

    pub(crate) fn attach(&mut self, name: String, result: ObjectValidationResult) {
        if !result.is_valid {
            self.is_valid = false;
        }
        self.fields.insert(name, result);
    }

    /// Returns `true` if this node and every field below it passed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Messages from this node's own rules.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Result for a directly registered field.
    pub fn field(&self, name: &str) -> Option<&ObjectValidationResult> {
        self.fields.get(name)
    }

    /// Field results in registration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &ObjectValidationResult)> {
        self.fields.iter().map(|(name, result)| (name.as_str(), result))
    }

    /// Follows a path of field names from this node.
    ///
    /// An empty path returns `self`. Field names are matched literally, so
    /// names containing dots need no escaping.
    pub fn at<I, S>(&self, path: I) -> Option<&ObjectValidationResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        path.into_iter()
            .try_fold(self, |node, segment| node.field(segment.as_ref()))
    }

    /// Every node that carries messages, depth first, paired with its field
    /// path from this node.
    pub fn errors(&self) -> Vec<(Vec<String>, &[Message])> {
        let mut out = Vec::new();
        self.collect_errors(&mut Vec::new(), &mut out);
        out
    }

    fn collect_errors<'a>(
        &'a self,
        path: &mut Vec<String>,
        out: &mut Vec<(Vec<String>, &'a [Message])>,
    ) {
        if !self.messages.is_empty() {
            out.push((path.clone(), &self.messages));
        }
        for (name, child) in &self.fields {
            path.push(name.clone());
            child.collect_errors(path, out);
            path.pop();
        }
    }

    // ========================================================================
    // JSON BOUNDARY
    // ========================================================================

    /// Flattens the tree into the `_isValid` / `_messages` JSON shape.
    ///
    /// Fields keep their registration order and come before the reserved
    /// keys, matching the [`Serialize`] output. A field literally named
    /// `_isValid` or `_messages` is shadowed by the reserved key.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, child) in &self.fields {
            if is_reserved(name) {
                continue;
            }
            map.insert(name.clone(), child.to_json());
        }
        map.insert(IS_VALID_KEY.to_owned(), Value::Bool(self.is_valid));
        map.insert(
            MESSAGES_KEY.to_owned(),
            Value::Array(
                self.messages
                    .iter()
                    .map(|message| Value::String(message.to_string()))
                    .collect(),
            ),
        );
        Value::Object(map)
    }

    /// Reads a tree back from its flattened JSON shape.
    ///
    /// Every key other than the reserved ones is decoded as a field result.
    pub fn from_json(value: &Value) -> Result<Self, ResultShapeError> {
        Self::decode(value, &mut Vec::new())
    }

    fn decode(value: &Value, path: &mut Vec<String>) -> Result<Self, ResultShapeError> {
        let Value::Object(map) = value else {
            return Err(ResultShapeError::NotAnObject { path: path.clone() });
        };

        let is_valid = map
            .get(IS_VALID_KEY)
            .and_then(Value::as_bool)
            .ok_or_else(|| ResultShapeError::MissingValidity { path: path.clone() })?;

        let messages = map
            .get(MESSAGES_KEY)
            .and_then(Value::as_array)
            .and_then(|items| {
                items
                    .iter()
                    .map(|item| item.as_str().map(|s| Cow::Owned(s.to_owned())))
                    .collect::<Option<Vec<Message>>>()
            })
            .ok_or_else(|| ResultShapeError::InvalidMessages { path: path.clone() })?;

        let mut fields = IndexMap::new();
        for (name, child) in map {
            if is_reserved(name) {
                continue;
            }
            path.push(name.clone());
            let decoded = Self::decode(child, path)?;
            path.pop();
            fields.insert(name.clone(), decoded);
        }

        Ok(Self {
            is_valid,
            messages,
            fields,
        })
    }
}

impl Serialize for ObjectValidationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let visible = self.fields.keys().filter(|name| !is_reserved(name)).count();
        let mut map = serializer.serialize_map(Some(visible + 2))?;
        for (name, child) in &self.fields {
            if is_reserved(name) {
                continue;
            }
            map.serialize_entry(name, child)?;
        }
        map.serialize_entry(IS_VALID_KEY, &self.is_valid)?;
        map.serialize_entry(MESSAGES_KEY, &self.messages)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ObjectValidationResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}
