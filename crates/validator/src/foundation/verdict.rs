//! Verdicts produced by rules and the self-rule fold.

use std::borrow::Cow;

/// A single validation message.
///
/// `Cow<'static, str>` keeps the common case of static default messages
/// allocation-free while still allowing formatted ones.
pub type Message = Cow<'static, str>;

// ============================================================================
// VERDICT
// ============================================================================

/// Outcome of one rule invocation, or of the whole self-rule list of a node.
///
/// Messages are reported only when the verdict is part of a failing fold;
/// a rule may return messages even when it passes (its default message), and
/// the fold decides whether they survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    is_valid: bool,
    messages: Vec<Message>,
}

impl Verdict {
    /// Creates a verdict from its parts.
    pub fn new(is_valid: bool, messages: Vec<Message>) -> Self {
        Self { is_valid, messages }
    }

    /// A passing verdict with no messages.
    #[must_use]
    pub fn valid() -> Self {
        Self::new(true, Vec::new())
    }

    /// A failing verdict carrying a single message.
    pub fn invalid(message: impl Into<Message>) -> Self {
        Self::new(false, vec![message.into()])
    }

    /// Builds a verdict from a boolean outcome and a borrowed message list.
    pub fn from_outcome(is_valid: bool, messages: &[Message]) -> Self {
        Self::new(is_valid, messages.to_vec())
    }

    /// Returns `true` if the verdict passed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the messages of this verdict.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Consumes the verdict and returns its messages.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    /// One step of the self-rule fold.
    ///
    /// Two passing verdicts collapse to an empty passing verdict. Anything
    /// else fails and appends `next`'s messages to the accumulated ones.
    #[must_use]
    pub fn combine(self, next: Verdict) -> Verdict {
        if self.is_valid && next.is_valid {
            return Verdict::valid();
        }

        let mut messages = self.messages;
        messages.extend(next.messages);
        Verdict::new(false, messages)
    }

    /// Folds a sequence of verdicts left to right with [`Verdict::combine`],
    /// starting from an empty passing verdict.
    ///
    /// Every verdict in the sequence is consumed; there is no early exit.
    ///
    /// ```
    /// use arbor_validator::foundation::Verdict;
    ///
    /// let folded = Verdict::aggregate([
    ///     Verdict::new(true, vec!["ok".into()]),
    ///     Verdict::invalid("too short"),
    ///     Verdict::new(true, vec!["ok".into()]),
    /// ]);
    /// assert!(!folded.is_valid());
    /// assert_eq!(folded.messages(), ["too short", "ok"]);
    /// ```
    pub fn aggregate<I>(verdicts: I) -> Verdict
    where
        I: IntoIterator<Item = Verdict>,
    {
        verdicts
            .into_iter()
            .fold(Verdict::valid(), Verdict::combine)
    }
}
