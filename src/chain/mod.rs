//! Validation chain for a single field
//!
//! A [`Chain`] is the live pipeline for one field: it holds the working
//! value (rewritten by sanitizers), the failure flag and the ordered
//! failure messages. Predicate and sanitizer methods all return
//! `&mut Self`, so a whole validation reads as one expression:
//!
//! ```rust,ignore
//! session
//!     .validate("age", false)
//!     .is_int("age must be an integer")
//!     .to_int()
//!     .greater_than(17, "too young");
//! ```
//!
//! The inert-chain behavior of the original design is a `terminated`
//! flag here: once set, predicate entry points return without evaluating
//! their condition (caller closures are never invoked), while sanitizers
//! and value retrieval stay active. A stop-on-fail chain terminates on
//! its first failing predicate; a triggered `optional` terminates the
//! chain in either mode.

mod predicates;
mod sanitizers;

use std::borrow::Cow;

use smallvec::SmallVec;
use tracing::trace;

use crate::value::Value;

/// A failure message recorded against a field.
pub type Message = Cow<'static, str>;

// ============================================================================
// CHAIN
// ============================================================================

/// The in-progress validation of a single field's value.
///
/// Created by [`Session::validate`](crate::Session::validate) (stop on
/// first failure) or [`Session::validate_all`](crate::Session::validate_all)
/// (collect every failure). Owned by the session; re-validating the same
/// field replaces the chain.
#[derive(Debug, Clone)]
pub struct Chain {
    key: String,
    value: Value,
    stop_on_fail: bool,
    is_valid: bool,
    terminated: bool,
    messages: SmallVec<[Message; 2]>,
}

impl Chain {
    pub(crate) fn new(key: String, value: Value, stop_on_fail: bool) -> Self {
        Self {
            key,
            value,
            stop_on_fail,
            is_valid: true,
            terminated: false,
            messages: SmallVec::new(),
        }
    }

    /// The field name this chain validates.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The current working value. Always available, even after the chain
    /// has terminated.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// False once any predicate has failed; never resets.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Failure messages in the order they were recorded.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    // ------------------------------------------------------------------
    // Shared predicate machinery
    // ------------------------------------------------------------------

    /// Entry point for every predicate: skips evaluation entirely on a
    /// terminated chain, otherwise evaluates the condition against the
    /// current working value and records the outcome.
    pub(crate) fn predicate<F>(&mut self, test: F, message: impl Into<Message>) -> &mut Self
    where
        F: FnOnce(&Value) -> bool,
    {
        if self.terminated {
            return self;
        }
        let passed = test(&self.value);
        self.check(passed, message)
    }

    /// Records a pass/fail outcome. Success is silent; failure flips
    /// `is_valid`, appends the message and terminates a stop-on-fail
    /// chain so later predicates become no-ops.
    fn check(&mut self, passed: bool, message: impl Into<Message>) -> &mut Self {
        if passed {
            return self;
        }
        self.is_valid = false;
        let message = message.into();
        trace!(field = %self.key, %message, "predicate failed");
        self.messages.push(message);
        if self.stop_on_fail {
            self.terminated = true;
        }
        self
    }

    /// Rewrites the working value. Sanitizers run unconditionally, even
    /// on a terminated chain.
    pub(crate) fn convert<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(Value) -> Value,
    {
        let current = std::mem::replace(&mut self.value, Value::Absent);
        self.value = f(current);
        self
    }

    // ------------------------------------------------------------------
    // Optional protocol
    // ------------------------------------------------------------------

    /// Skips the rest of the chain when the value is falsy, substituting
    /// an empty string as the working value.
    ///
    /// Subsequent predicates vacuously pass; subsequent sanitizers still
    /// run, starting from the substituted value.
    pub fn optional(&mut self) -> &mut Self {
        self.skip_if_missing(Value::Str(String::new()), false)
    }

    /// Like [`optional`](Self::optional), substituting `default` instead
    /// of the empty string.
    pub fn optional_or(&mut self, default: impl Into<Value>) -> &mut Self {
        self.skip_if_missing(default.into(), false)
    }

    /// Strict variant: only an exactly-absent value triggers the skip.
    /// A present-but-falsy value (`false`, `0`, `""`) is treated as real
    /// data and the chain continues unmodified.
    pub fn optional_strict(&mut self) -> &mut Self {
        self.skip_if_missing(Value::Str(String::new()), true)
    }

    /// Strict variant with an explicit default.
    pub fn optional_strict_or(&mut self, default: impl Into<Value>) -> &mut Self {
        self.skip_if_missing(default.into(), true)
    }

    fn skip_if_missing(&mut self, default: Value, strict: bool) -> &mut Self {
        if self.terminated {
            return self;
        }
        let triggered = if strict {
            self.value.is_absent()
        } else {
            !self.value.is_truthy()
        };
        if triggered {
            self.value = default;
            self.terminated = true;
        }
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
