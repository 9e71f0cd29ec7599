//! Sanitizer methods
//!
//! Sanitizers rewrite the working value and nothing else: they never
//! append messages, never touch the failure flag, and keep running even
//! after the chain has terminated, so `value()` reflects a best-effort
//! converted result for an already-failed field. A failed numeric parse
//! leaves `Float(NAN)`; a failed date parse leaves `InvalidDate`.

use chrono::DateTime;

use super::Chain;
use crate::datetime;
use crate::value::Value;

impl Chain {
    /// Parses the value as a base-10 integer; non-integer input becomes
    /// the NaN sentinel. A float truncates toward zero.
    pub fn to_int(&mut self) -> &mut Self {
        self.to_int_radix(10)
    }

    /// Parses the value as an integer in the given radix.
    pub fn to_int_radix(&mut self, radix: u32) -> &mut Self {
        self.convert(|value| match value {
            Value::Str(s) => i64::from_str_radix(s.trim(), radix)
                .map(Value::Int)
                .unwrap_or(Value::Float(f64::NAN)),
            Value::Int(i) => Value::Int(i),
            Value::Float(f) if f.is_finite() => Value::Int(f.trunc() as i64),
            _ => Value::Float(f64::NAN),
        })
    }

    /// Parses the value as a double-precision float; unparseable input
    /// becomes the NaN sentinel.
    pub fn to_float(&mut self) -> &mut Self {
        self.convert(|value| match value {
            Value::Str(s) => s
                .trim()
                .parse::<f64>()
                .map(Value::Float)
                .unwrap_or(Value::Float(f64::NAN)),
            Value::Int(i) => Value::Float(i as f64),
            Value::Float(f) => Value::Float(f),
            _ => Value::Float(f64::NAN),
        })
    }

    /// Converts to a boolean: nullish values, numeric zero, NaN and the
    /// strings `""`, `"0"` and `"false"` become `false`; everything else
    /// becomes `true`.
    pub fn to_boolean(&mut self) -> &mut Self {
        self.convert(|value| {
            let b = match &value {
                Value::Absent | Value::Null => false,
                Value::Bool(b) => *b,
                Value::Int(i) => *i != 0,
                Value::Float(f) => *f != 0.0 && !f.is_nan(),
                Value::Str(s) => !(s.is_empty() || s == "0" || s == "false"),
                _ => true,
            };
            Value::Bool(b)
        })
    }

    /// Strict boolean conversion: only `"1"`, `"true"`, the integer 1 and
    /// `true` itself become `true`.
    pub fn to_boolean_strict(&mut self) -> &mut Self {
        self.convert(|value| {
            let b = match &value {
                Value::Str(s) => s == "1" || s == "true",
                Value::Int(i) => *i == 1,
                Value::Bool(b) => *b,
                _ => false,
            };
            Value::Bool(b)
        })
    }

    /// Parses the value into a date-time, trying the collaborator's known
    /// layouts. Numbers are treated as epoch milliseconds. Failure leaves
    /// the `InvalidDate` sentinel.
    pub fn to_date(&mut self) -> &mut Self {
        self.convert(|value| convert_date(value, None))
    }

    /// Like [`to_date`](Self::to_date) with an explicit
    /// [chrono format string](chrono::format::strftime).
    pub fn to_date_format(&mut self, format: &str) -> &mut Self {
        self.convert(|value| convert_date(value, Some(format)))
    }

    /// Replaces the value with `f(value)`.
    pub fn to_value<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(Value) -> Value,
    {
        self.convert(f)
    }
}

fn convert_date(value: Value, format: Option<&str>) -> Value {
    match value {
        Value::Str(s) => datetime::parse(&s, format)
            .map(Value::DateTime)
            .unwrap_or(Value::InvalidDate),
        Value::Int(millis) => from_epoch_millis(millis),
        Value::Float(f) if f.is_finite() => from_epoch_millis(f as i64),
        Value::DateTime(dt) => Value::DateTime(dt),
        _ => Value::InvalidDate,
    }
}

fn from_epoch_millis(millis: i64) -> Value {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| Value::DateTime(dt.fixed_offset()))
        .unwrap_or(Value::InvalidDate)
}

// ============================================================================
// TESTS
// ============================================================================
