//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: create a complete JSON rule (struct + `Rule` impl + message
//!   overrides + factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use arbor_validator::rule;
//! use serde_json::Value;
//!
//! // Rule without parameters
//! rule! {
//!     pub IsBool;
//!     check(value) { matches!(value, Some(Value::Bool(_))) }
//!     message() { "Must be true or false" }
//!     fn is_bool();
//! }
//!
//! // Rule with parameters
//! rule! {
//!     pub AtLeastItems { min: usize };
//!     check(self, value) { value.and_then(Value::as_array).is_some_and(|a| a.len() >= self.min) }
//!     message(self) { format!("Must contain at least {} items", self.min) }
//!     fn at_least_items(min: usize);
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule over `serde_json::Value`: struct definition,
/// [`Rule`](crate::foundation::Rule) and
/// [`IntoFieldRule`](crate::object::IntoFieldRule) implementations, message
/// overrides and a factory function.
///
/// The `check` block returns `bool`; the rule's messages are attached to the
/// verdict whatever the outcome, and the self-rule fold decides whether they
/// are reported. The `message` block yields the default message as a
/// `&'static str` or `String`; callers replace it with `with_message` or
/// `with_messages`.
///
/// `#[derive(Debug, Clone)]` is always applied.
///
/// # Variants
///
/// **Unit rule** (no parameters):
/// ```rust,ignore
/// rule! {
///     pub IsString;
///     check(value) { matches!(value, Some(Value::String(_))) }
///     message() { "Must be a string" }
///     fn is_string();
/// }
/// ```
///
/// **Parameterised rule** (`new` takes the parameters in declaration order):
/// ```rust,ignore
/// rule! {
///     pub Min { threshold: f64 };
///     check(self, value) { number(value).is_some_and(|n| self.threshold <= n) }
///     message(self) { format!("Must be at least {}", self.threshold) }
///     fn min(threshold: f64);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Shared message overrides ─────────────────────────────────────────
    (@messages) => {
        /// Replaces the messages with a single one.
        #[must_use = "builder methods must be chained or built"]
        pub fn with_message(mut self, message: impl ::std::convert::Into<$crate::foundation::Message>) -> Self {
            self.messages = ::std::vec![message.into()];
            self
        }

        /// Replaces the messages.
        #[must_use = "builder methods must be chained or built"]
        pub fn with_messages<I, M>(mut self, messages: I) -> Self
        where
            I: ::std::iter::IntoIterator<Item = M>,
            M: ::std::convert::Into<$crate::foundation::Message>,
        {
            self.messages = messages.into_iter().map(::std::convert::Into::into).collect();
            self
        }

        /// Messages reported with this rule's verdicts.
        pub fn messages(&self) -> &[$crate::foundation::Message] {
            &self.messages
        }
    };

    // ── Variant 1: Unit rule (no parameters) + factory fn ────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        check($inp:ident) $check:block
        message() $msg:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            messages: ::std::vec::Vec<$crate::foundation::Message>,
        }

        impl $name {
            /// Creates the rule with its default message.
            #[must_use]
            pub fn new() -> Self {
                Self {
                    messages: ::std::vec![Self::default_message()],
                }
            }

            fn default_message() -> $crate::foundation::Message {
                $crate::foundation::Message::from($msg)
            }

            $crate::rule!(@messages);
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::foundation::Rule<$crate::serde_json::Value> for $name {
            #[allow(unused_variables)]
            fn check(
                &self,
                $inp: ::std::option::Option<&$crate::serde_json::Value>,
            ) -> $crate::foundation::Verdict {
                $crate::foundation::Verdict::from_outcome($check, &self.messages)
            }
        }

        impl $crate::object::IntoFieldRule<$crate::serde_json::Value> for $name {
            fn into_field_rule(self) -> $crate::object::FieldRule<$crate::serde_json::Value> {
                $crate::object::FieldRule::rule(self)
            }
        }

        #[must_use]
        $vis fn $factory() -> $name {
            $name::new()
        }
    };

    // ── Variant 2: Parameterised rule + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $inp:ident) $check:block
        message($self2:ident) $msg:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
            messages: ::std::vec::Vec<$crate::foundation::Message>,
        }

        impl $name {
            /// Creates the rule with its default message.
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                let mut rule = Self {
                    $($field,)+
                    messages: ::std::vec::Vec::new(),
                };
                rule.messages.push(rule.default_message());
                rule
            }

            fn default_message(&$self2) -> $crate::foundation::Message {
                $crate::foundation::Message::from($msg)
            }

            $crate::rule!(@messages);
        }

        impl $crate::foundation::Rule<$crate::serde_json::Value> for $name {
            #[allow(unused_variables)]
            fn check(
                &$self_,
                $inp: ::std::option::Option<&$crate::serde_json::Value>,
            ) -> $crate::foundation::Verdict {
                $crate::foundation::Verdict::from_outcome($check, &$self_.messages)
            }
        }

        impl $crate::object::IntoFieldRule<$crate::serde_json::Value> for $name {
            fn into_field_rule(self) -> $crate::object::FieldRule<$crate::serde_json::Value> {
                $crate::object::FieldRule::rule(self)
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}
