//! Predicate methods
//!
//! Each predicate evaluates a condition against the current working value
//! and records the trailing message on failure. Length predicates and the
//! format predicates require a string working value; the numeric-shape
//! predicates (`is_numeric`, `is_int`, `is_number`) also accept native
//! numeric values.

use regex::Regex;

use super::{Chain, Message};
use crate::formats;
use crate::value::Value;

impl Chain {
    // ------------------------------------------------------------------
    // Length
    // ------------------------------------------------------------------

    /// Passes when the value is a string of exactly `n` characters.
    pub fn has_length(&mut self, n: usize, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| v.str_len() == Some(n), message)
    }

    /// Passes when the value is a string of at least `n` characters.
    pub fn min_length(&mut self, n: usize, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| v.str_len().is_some_and(|len| len >= n), message)
    }

    /// Passes when the value is a string of at most `n` characters.
    pub fn max_length(&mut self, n: usize, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| v.str_len().is_some_and(|len| len <= n), message)
    }

    /// Passes when the value is a string whose length is within `min..=max`.
    pub fn length_between(
        &mut self,
        min: usize,
        max: usize,
        message: impl Into<Message>,
    ) -> &mut Self {
        self.predicate(
            |v| v.str_len().is_some_and(|len| len >= min && len <= max),
            message,
        )
    }

    // ------------------------------------------------------------------
    // Presence and null checks
    // ------------------------------------------------------------------

    /// Passes when the value is present and, if a string, non-empty.
    pub fn has_value(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(
            |v| match v {
                Value::Str(s) => !s.is_empty(),
                other => !other.is_nullish(),
            },
            message,
        )
    }

    /// Passes when the value is not absent. An explicit null is defined.
    pub fn is_defined(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| !v.is_absent(), message)
    }

    /// Loose: passes when the value is neither null nor absent.
    pub fn not_null(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| !v.is_nullish(), message)
    }

    /// Strict: passes unless the value is exactly null (absent passes).
    pub fn strict_not_null(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| !v.is_null(), message)
    }

    /// Loose: passes when the value is null or absent.
    pub fn is_null(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| v.is_nullish(), message)
    }

    /// Strict: passes only when the value is exactly null.
    pub fn strict_is_null(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| v.is_null(), message)
    }

    // ------------------------------------------------------------------
    // Equality and comparison
    // ------------------------------------------------------------------

    /// Coercing equality with `expected` (see [`Value::loose_eq`]).
    pub fn equal(&mut self, expected: impl Into<Value>, message: impl Into<Message>) -> &mut Self {
        let expected = expected.into();
        self.predicate(|v| v.loose_eq(&expected), message)
    }

    /// Identity equality with `expected`: same variant, same payload.
    pub fn strict_equal(
        &mut self,
        expected: impl Into<Value>,
        message: impl Into<Message>,
    ) -> &mut Self {
        let expected = expected.into();
        self.predicate(|v| *v == expected, message)
    }

    /// Passes when the value is exactly boolean `true`.
    pub fn is_true(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| matches!(v, Value::Bool(true)), message)
    }

    /// Passes when the value is exactly boolean `false`.
    pub fn is_false(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| matches!(v, Value::Bool(false)), message)
    }

    /// Coercing numeric comparison; fails when the value coerces to NaN.
    pub fn greater_than(
        &mut self,
        bound: impl Into<f64>,
        message: impl Into<Message>,
    ) -> &mut Self {
        let bound = bound.into();
        self.predicate(|v| v.to_f64() > bound, message)
    }

    /// Coercing numeric comparison; fails when the value coerces to NaN.
    pub fn less_than(&mut self, bound: impl Into<f64>, message: impl Into<Message>) -> &mut Self {
        let bound = bound.into();
        self.predicate(|v| v.to_f64() < bound, message)
    }

    /// Passes when the value coerces to NaN.
    pub fn is_nan(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| v.to_f64().is_nan(), message)
    }

    /// Passes when the value coerces to a real number.
    pub fn is_not_nan(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| !v.to_f64().is_nan(), message)
    }

    // ------------------------------------------------------------------
    // Pattern and custom predicates
    // ------------------------------------------------------------------

    /// Passes when the value is a string matching `pattern`.
    pub fn matches(&mut self, pattern: &Regex, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| v.as_str().is_some_and(|s| pattern.is_match(s)), message)
    }

    /// Passes when `test` returns true for the current working value.
    ///
    /// A panicking `test` propagates immediately; caller-supplied
    /// predicates are not caught or converted into failure messages.
    pub fn passes<F>(&mut self, test: F, message: impl Into<Message>) -> &mut Self
    where
        F: FnOnce(&Value) -> bool,
    {
        self.predicate(test, message)
    }

    // ------------------------------------------------------------------
    // Format predicates (string-classification collaborator)
    // ------------------------------------------------------------------

    /// Passes for strings of letters only.
    pub fn is_alpha(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| v.as_str().is_some_and(formats::is_alpha), message)
    }

    /// Passes for strings of letters and digits only.
    pub fn is_alphanumeric(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| v.as_str().is_some_and(formats::is_alphanumeric), message)
    }

    /// Passes for digit-run strings, native integers, and floats with no
    /// fractional part.
    pub fn is_numeric(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(
            |v| match v {
                Value::Int(_) => true,
                Value::Float(f) => f.is_finite() && f.fract() == 0.0,
                Value::Str(s) => formats::is_numeric(s),
                _ => false,
            },
            message,
        )
    }

    /// Passes for canonical integer literals, native integers, and floats
    /// with no fractional part.
    pub fn is_int(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(
            |v| match v {
                Value::Int(_) => true,
                Value::Float(f) => f.is_finite() && f.fract() == 0.0,
                Value::Str(s) => formats::is_int(s),
                _ => false,
            },
            message,
        )
    }

    /// Passes for strings shaped like a float literal.
    pub fn is_float(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| v.as_str().is_some_and(formats::is_float), message)
    }

    /// Passes for any numeric value: native ints, non-NaN floats, and
    /// number-shaped strings.
    pub fn is_number(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(
            |v| match v {
                Value::Int(_) => true,
                Value::Float(f) => !f.is_nan(),
                Value::Str(s) => formats::is_float(s),
                _ => false,
            },
            message,
        )
    }

    /// Passes for email-shaped strings.
    pub fn is_email(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| v.as_str().is_some_and(formats::is_email), message)
    }

    /// Passes for http/https URL-shaped strings.
    pub fn is_url(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| v.as_str().is_some_and(formats::is_url), message)
    }

    /// Passes for bare-file-name-shaped strings.
    pub fn is_filename(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| v.as_str().is_some_and(formats::is_filename), message)
    }

    /// Passes for 3- or 6-digit hex color strings.
    pub fn is_hexcolor(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| v.as_str().is_some_and(formats::is_hexcolor), message)
    }

    /// Passes for strings the date-parsing collaborator recognizes.
    pub fn is_date_format(&mut self, message: impl Into<Message>) -> &mut Self {
        self.predicate(|v| v.as_str().is_some_and(formats::is_date_format), message)
    }
}

// ============================================================================
// TESTS
// ============================================================================
