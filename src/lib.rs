//! # fieldcheck
//!
//! Chained validation and sanitization for named input values (request
//! parameters, form fields, config maps).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//! use serde_json::json;
//!
//! let mut session = Session::from_json(&json!({ "age": "19", "name": " bo " }))?;
//!
//! session
//!     .validate("age", false)
//!     .is_int("age must be an integer")
//!     .to_int()
//!     .greater_than(17, "too young");
//!
//! session
//!     .validate("name", true) // trim before validating
//!     .min_length(2, "name is too short");
//!
//! assert!(!session.has_failures());
//! assert_eq!(session.value("age"), Some(&Value::Int(19)));
//! ```
//!
//! ## Modes
//!
//! [`Session::validate`] short-circuits a field on its first failing
//! predicate; [`Session::validate_all`] keeps evaluating and collects
//! every failure message. Either way the session keeps validating its
//! other fields; only the current field's chain stops.
//!
//! ## Optional fields
//!
//! [`Chain::optional`] and its variants skip the rest of a chain when a
//! field is legitimately missing, substituting a default working value.
//! Sanitizers still run on the substituted value.

pub mod chain;
pub mod datetime;
pub mod formats;
pub mod prelude;
pub mod session;
pub mod value;

pub use chain::{Chain, Message};
pub use datetime::DateParseError;
pub use session::{Session, SourceError};
pub use value::Value;
