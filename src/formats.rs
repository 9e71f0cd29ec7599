//! String-classification collaborator
//!
//! Shape tests backing the chain's format predicates. Contract: every
//! function takes string input, returns a strict bool and never panics.
//! The chain engine decides what non-string working values mean for each
//! predicate; these functions only classify strings.

use std::sync::LazyLock;

static ALPHA_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-zA-Z]+$").unwrap());

static ALPHANUMERIC_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

static NUMERIC_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[+-]?[0-9]+$").unwrap());

static INT_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[+-]?(?:0|[1-9][0-9]*)$").unwrap());

static FLOAT_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
});

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

static URL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

// Rejects path separators, control characters and reserved punctuation.
static FILENAME_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r#"^[^\x00-\x1f\\/:*?"<>|]+$"#).unwrap());

static HEXCOLOR_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Letters only.
#[must_use]
pub fn is_alpha(input: &str) -> bool {
    ALPHA_REGEX.is_match(input)
}

/// Letters and digits only.
#[must_use]
pub fn is_alphanumeric(input: &str) -> bool {
    ALPHANUMERIC_REGEX.is_match(input)
}

/// An optionally signed run of digits.
#[must_use]
pub fn is_numeric(input: &str) -> bool {
    NUMERIC_REGEX.is_match(input)
}

/// A canonical integer literal (no leading zeros).
#[must_use]
pub fn is_int(input: &str) -> bool {
    INT_REGEX.is_match(input)
}

/// A decimal or scientific float literal.
#[must_use]
pub fn is_float(input: &str) -> bool {
    FLOAT_REGEX.is_match(input)
}

/// A plausible email address shape.
#[must_use]
pub fn is_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

/// An http/https URL shape.
#[must_use]
pub fn is_url(input: &str) -> bool {
    URL_REGEX.is_match(input)
}

/// A bare file name: no path separators or reserved characters.
#[must_use]
pub fn is_filename(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed != "." && trimmed != ".." && FILENAME_REGEX.is_match(trimmed)
}

/// A 3- or 6-digit hex color, `#` optional.
#[must_use]
pub fn is_hexcolor(input: &str) -> bool {
    HEXCOLOR_REGEX.is_match(input)
}

/// Anything the date-parsing collaborator recognizes.
#[must_use]
pub fn is_date_format(input: &str) -> bool {
    crate::datetime::parse(input, None).is_ok()
}

// ============================================================================
// TESTS
// ============================================================================
