//! Heterogeneous working values
//!
//! Every field in a session source carries a [`Value`]: the full range of
//! shapes a request parameter can arrive in, plus the sentinels the chain
//! engine needs (`Absent` for a missing key, `Float(NAN)` for a failed
//! numeric conversion, `InvalidDate` for a failed date conversion).

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

// ============================================================================
// VALUE
// ============================================================================

/// A field's working value.
///
/// Starts out as the raw source value of a field and is rewritten by
/// sanitizer calls as a chain progresses. `Absent` marks a key that was
/// never present in the source; it is distinct from an explicit `Null`,
/// and the loose/strict null predicates treat the two differently.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The key was not present in the source mapping.
    Absent,
    /// An explicit null.
    Null,
    Bool(bool),
    Int(i64),
    /// `Float(f64::NAN)` doubles as the not-a-number sentinel produced by
    /// failed `to_int`/`to_float` conversions.
    Float(f64),
    Str(String),
    DateTime(DateTime<FixedOffset>),
    /// The not-a-date sentinel produced by a failed `to_date` conversion.
    InvalidDate,
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Returns true if this is the absent-marker (key missing from source).
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns true if this is exactly `Null` (strict null check).
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for `Null` or `Absent` (loose null check).
    ///
    /// Kept separate from [`is_null`](Self::is_null): the predicate
    /// contract requires both behaviors.
    #[must_use]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Absent)
    }

    /// Truthiness: `Absent`, `Null`, `false`, numeric zero, NaN and the
    /// empty string are falsy; everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Absent | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::Str(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Returns the string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// String length in Unicode scalar values, if this is a string.
    #[must_use]
    pub fn str_len(&self) -> Option<usize> {
        self.as_str().map(|s| s.chars().count())
    }

    /// Coerces to a number for ordering comparisons and NaN tests.
    ///
    /// `Null` coerces to 0, `Absent` to NaN, booleans to 0/1, strings
    /// parse (an empty or whitespace-only string is 0), a date-time
    /// yields its epoch-millisecond timestamp. Anything unparseable or
    /// structural is NaN.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Value::Absent => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Int(i) => *i as f64,
            Value::Float(f) => *f,
            Value::Str(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
            Value::DateTime(dt) => dt.timestamp_millis() as f64,
            Value::InvalidDate | Value::Array(_) | Value::Object(_) => f64::NAN,
        }
    }

    /// Coercing equality: nullish values equal each other, numbers compare
    /// across `Int`/`Float`, strings and booleans coerce to numbers when
    /// compared against one. Structural values never compare loosely equal
    /// unless strictly equal.
    #[must_use]
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Absent | Value::Null, Value::Absent | Value::Null) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            _ => {
                // Nullish never loosely equals a present value.
                if self.is_nullish() || other.is_nullish() {
                    return false;
                }
                let (a, b) = (self.to_f64(), other.to_f64());
                !a.is_nan() && !b.is_nan() && a == b
            }
        }
    }

    /// Trims leading/trailing whitespace if this is a string; otherwise
    /// returns the value unchanged.
    #[must_use]
    pub fn trimmed(self) -> Value {
        match self {
            Value::Str(s) => Value::Str(s.trim().to_string()),
            other => other,
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

// ============================================================================
// SERIALIZATION
// ============================================================================

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Sentinels have no data representation beyond null.
            Value::Absent | Value::Null | Value::InvalidDate => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::DateTime(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            Value::Array(items) => items.serialize(serializer),
            Value::Object(map) => map.serialize(serializer),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness_falsy_values() {
        assert!(!Value::Absent.is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(!Value::Float(0.0).is_truthy());
        assert!(!Value::Float(f64::NAN).is_truthy());
        assert!(!Value::Str(String::new()).is_truthy());
    }

    #[test]
    fn test_truthiness_truthy_values() {
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Int(-1).is_truthy());
        assert!(Value::Str("0".into()).is_truthy());
        assert!(Value::Array(vec![]).is_truthy());
        assert!(Value::InvalidDate.is_truthy());
    }

    #[test]
    fn test_nullish_distinctions() {
        assert!(Value::Absent.is_nullish());
        assert!(Value::Null.is_nullish());
        assert!(!Value::Absent.is_null());
        assert!(Value::Null.is_null());
        assert!(!Value::Str(String::new()).is_nullish());
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(Value::Null.to_f64(), 0.0);
        assert!(Value::Absent.to_f64().is_nan());
        assert_eq!(Value::Bool(true).to_f64(), 1.0);
        assert_eq!(Value::Str(" 42 ".into()).to_f64(), 42.0);
        assert_eq!(Value::Str(String::new()).to_f64(), 0.0);
        assert!(Value::Str("abc".into()).to_f64().is_nan());
        assert!(Value::Array(vec![]).to_f64().is_nan());
    }

    #[test]
    fn test_loose_eq_coercion() {
        assert!(Value::Null.loose_eq(&Value::Absent));
        assert!(Value::Int(5).loose_eq(&Value::Str("5".into())));
        assert!(Value::Int(5).loose_eq(&Value::Float(5.0)));
        assert!(Value::Bool(true).loose_eq(&Value::Int(1)));
        // Nullish never equals a present value, not even falsy ones.
        assert!(!Value::Null.loose_eq(&Value::Int(0)));
        assert!(!Value::Str("a".into()).loose_eq(&Value::Str("b".into())));
    }

    #[test]
    fn test_strict_eq_nan() {
        // Strict equality is identity: NaN != NaN.
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_ne!(Value::Int(5), Value::Float(5.0));
        assert_eq!(Value::Int(5), Value::Int(5));
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(
            Value::Str("  bar  ".into()).trimmed(),
            Value::Str("bar".into())
        );
        assert_eq!(Value::Int(3).trimmed(), Value::Int(3));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(19)), Value::Int(19));
        assert_eq!(Value::from(json!(1.5)), Value::Float(1.5));
        assert_eq!(Value::from(json!("x")), Value::Str("x".into()));
        assert_eq!(
            Value::from(json!([1, "a"])),
            Value::Array(vec![Value::Int(1), Value::Str("a".into())])
        );
    }

    #[test]
    fn test_serialize_sentinels_as_null() {
        assert_eq!(serde_json::to_value(Value::Absent).unwrap(), json!(null));
        assert_eq!(
            serde_json::to_value(Value::InvalidDate).unwrap(),
            json!(null)
        );
        assert_eq!(serde_json::to_value(Value::Int(7)).unwrap(), json!(7));
    }

    #[test]
    fn test_serialize_datetime_rfc3339() {
        let dt = chrono::DateTime::parse_from_rfc3339("2020-01-02T03:04:05+00:00").unwrap();
        assert_eq!(
            serde_json::to_value(Value::DateTime(dt)).unwrap(),
            json!("2020-01-02T03:04:05+00:00")
        );
    }
}
