//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck::prelude::*;` import that brings in
//! everything a typical validation pass needs.

pub use crate::chain::{Chain, Message};
pub use crate::datetime::DateParseError;
pub use crate::session::{Session, SourceError};
pub use crate::value::Value;
