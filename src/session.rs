//! Validation session over one input mapping
//!
//! A [`Session`] owns the source mapping of field name to raw value,
//! mints one [`Chain`] per validated field (re-validating a name replaces
//! the prior chain without changing its position), and aggregates failure
//! state, messages and final values across every chain it has produced.

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::debug;

use crate::chain::{Chain, Message};
use crate::value::Value;

// ============================================================================
// ERRORS
// ============================================================================

/// Failure to build a session from external input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// [`Session::from_json`] was handed something other than an object.
    #[error("session source must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

// ============================================================================
// SESSION
// ============================================================================

/// One validation pass over one input mapping.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
/// use serde_json::json;
///
/// let mut session = Session::from_json(&json!({ "age": "19" }))?;
/// session
///     .validate("age", false)
///     .is_int("age must be an integer")
///     .to_int()
///     .greater_than(17, "too young");
///
/// assert!(!session.has_failures());
/// assert_eq!(session.value("age"), Some(&Value::Int(19)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    source: IndexMap<String, Value>,
    chains: IndexMap<String, Chain>,
}

impl Session {
    /// Creates a session over an already-built source mapping.
    #[must_use]
    pub fn new(source: IndexMap<String, Value>) -> Self {
        Self {
            source,
            chains: IndexMap::new(),
        }
    }

    /// Creates a session from a JSON object (e.g. parsed query or body
    /// parameters). Key order is preserved.
    ///
    /// # Errors
    ///
    /// [`SourceError::NotAnObject`] for any non-object JSON value.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, SourceError> {
        match json {
            serde_json::Value::Object(map) => Ok(map
                .iter()
                .map(|(k, v)| (k.clone(), Value::from(v.clone())))
                .collect()),
            other => Err(SourceError::NotAnObject(json_type_name(other))),
        }
    }

    // ------------------------------------------------------------------
    // Chain minting
    // ------------------------------------------------------------------

    /// Starts a stop-on-first-failure chain for `name`, replacing any
    /// prior chain for that field. The working value is the source value
    /// (the absent-marker when the key is missing), trimmed of
    /// surrounding whitespace when `trim` is true and the value is a
    /// string.
    pub fn validate(&mut self, name: &str, trim: bool) -> &mut Chain {
        self.mint(name, trim, true)
    }

    /// Starts a collect-all chain for `name`: every predicate in the
    /// expression runs regardless of earlier failures on this field.
    pub fn validate_all(&mut self, name: &str, trim: bool) -> &mut Chain {
        self.mint(name, trim, false)
    }

    fn mint(&mut self, name: &str, trim: bool, stop_on_fail: bool) -> &mut Chain {
        let mut value = self.source.get(name).cloned().unwrap_or(Value::Absent);
        if trim {
            value = value.trimmed();
        }
        debug!(field = name, stop_on_fail, "starting validation chain");
        let chain = Chain::new(name.to_string(), value, stop_on_fail);
        match self.chains.entry(name.to_string()) {
            Entry::Occupied(mut occupied) => {
                // Replacing in place keeps first-validated iteration order.
                occupied.insert(chain);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(chain),
        }
    }

    // ------------------------------------------------------------------
    // Aggregate queries
    // ------------------------------------------------------------------

    /// True iff any registered chain has failed. An empty session reports
    /// no failures.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.chains.values().any(|chain| !chain.is_valid())
    }

    /// True when no chain is registered for `name`, or the registered
    /// chain has failed. A never-validated field defaults to "has
    /// failures".
    #[must_use]
    pub fn has_failures_for(&self, name: &str) -> bool {
        self.chains.get(name).is_none_or(|chain| !chain.is_valid())
    }

    /// Ordered failure messages for one field; empty when the field is
    /// valid or was never validated.
    #[must_use]
    pub fn messages_for(&self, name: &str) -> &[Message] {
        self.chains.get(name).map_or(&[], Chain::messages)
    }

    /// Every registered field's (possibly empty) message sequence, in the
    /// order fields were first validated.
    #[must_use]
    pub fn messages(&self) -> IndexMap<&str, &[Message]> {
        self.chains
            .iter()
            .map(|(name, chain)| (name.as_str(), chain.messages()))
            .collect()
    }

    /// The current working value of a validated field, or `None` when the
    /// name was never validated.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.chains.get(name).map(Chain::value)
    }

    /// Every registered field's current working value, in first-validated
    /// order.
    #[must_use]
    pub fn values(&self) -> IndexMap<&str, &Value> {
        self.chains
            .iter()
            .map(|(name, chain)| (name.as_str(), chain.value()))
            .collect()
    }

    /// True when the source contains a key no chain was ever minted for.
    /// A diagnostic for "did I forget to validate a field".
    #[must_use]
    pub fn has_unchecked_properties(&self) -> bool {
        self.source.keys().any(|key| !self.chains.contains_key(key))
    }
}

impl FromIterator<(String, Value)> for Session {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn json_type_name(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session(json: serde_json::Value) -> Session {
        Session::from_json(&json).expect("object source")
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(matches!(
            Session::from_json(&json!([1, 2])),
            Err(SourceError::NotAnObject("an array"))
        ));
        assert!(Session::from_json(&json!({})).is_ok());
    }

    #[test]
    fn test_empty_session_reports_no_failures() {
        let s = session(json!({ "a": 1 }));
        assert!(!s.has_failures());
        assert!(s.messages().is_empty());
    }

    #[test]
    fn test_missing_field_gets_absent_marker() {
        let mut s = session(json!({}));
        s.validate("ghost", false);
        assert_eq!(s.value("ghost"), Some(&Value::Absent));
    }

    #[test]
    fn test_never_validated_field_has_failures_but_no_messages() {
        let s = session(json!({ "a": 1 }));
        assert!(s.has_failures_for("a"));
        assert!(s.messages_for("a").is_empty());
        assert_eq!(s.value("a"), None);
    }

    #[test]
    fn test_trim_applies_to_strings_only() {
        let mut s = session(json!({ "name": "  bar  ", "n": 3 }));
        s.validate("name", true);
        s.validate("n", true);
        assert_eq!(s.value("name"), Some(&Value::Str("bar".into())));
        assert_eq!(s.value("n"), Some(&Value::Int(3)));
    }

    #[test]
    fn test_revalidation_replaces_chain_and_keeps_order() {
        let mut s = session(json!({ "a": "x", "b": "y" }));
        s.validate("a", false).has_length(9, "wrong length");
        s.validate("b", false);
        assert!(s.has_failures_for("a"));

        // A fresh chain discards the prior failure and keeps position.
        s.validate("a", false);
        assert!(!s.has_failures_for("a"));
        let order: Vec<_> = s.messages().keys().copied().collect();
        assert_eq!(order, ["a", "b"]);
    }

    #[test]
    fn test_messages_aggregate_view() {
        let mut s = session(json!({ "a": "", "b": "ok" }));
        s.validate("a", false).has_value("a is required");
        s.validate("b", false).has_value("b is required");
        let all = s.messages();
        assert_eq!(all["a"], ["a is required"]);
        assert!(all["b"].is_empty());
    }

    #[test]
    fn test_values_reflect_conversions() {
        let mut s = session(json!({ "age": "19" }));
        s.validate("age", false).to_int();
        assert_eq!(s.values()["age"], &Value::Int(19));
    }

    #[test]
    fn test_unchecked_properties() {
        let mut s = session(json!({ "a": 1, "b": 2 }));
        s.validate("a", false);
        assert!(s.has_unchecked_properties());
        s.validate_all("b", false);
        assert!(!s.has_unchecked_properties());
    }

    #[test]
    fn test_field_failure_does_not_abort_session() {
        let mut s = session(json!({ "a": "", "b": "fine" }));
        s.validate("a", false).has_value("missing");
        s.validate("b", false).has_value("missing");
        assert!(s.has_failures_for("a"));
        assert!(!s.has_failures_for("b"));
    }
}
