//! Date-parsing collaborator
//!
//! Turns string input into a fixed-offset date-time for the `to_date`
//! sanitizer and the `is_date_format` predicate. With an explicit format
//! the input is tried as a zoned date-time, a naive date-time and a bare
//! date (naive interpretations assume UTC). Without one, RFC 3339,
//! RFC 2822 and a fixed list of common layouts are tried in order.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

// ============================================================================
// ERRORS
// ============================================================================

/// Failure to interpret a string as a date-time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    /// The input did not match the caller-supplied format string.
    #[error("`{input}` does not match date format `{format}`")]
    FormatMismatch { input: String, format: String },

    /// The input matched none of the known layouts.
    #[error("`{input}` is not a recognized date-time")]
    Unrecognized { input: String },
}

// ============================================================================
// PARSING
// ============================================================================

/// Naive layouts tried when no explicit format is given. Naive values are
/// interpreted as UTC.
const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%m/%d/%Y"];

/// Parses `input` into a date-time, optionally against an explicit
/// [chrono format string](chrono::format::strftime).
///
/// # Errors
///
/// Returns [`DateParseError`] when no interpretation succeeds. The
/// `to_date` sanitizer maps this onto the `InvalidDate` sentinel.
pub fn parse(input: &str, format: Option<&str>) -> Result<DateTime<FixedOffset>, DateParseError> {
    let input = input.trim();
    match format {
        Some(fmt) => {
            parse_with_format(input, fmt).ok_or_else(|| DateParseError::FormatMismatch {
                input: input.to_string(),
                format: fmt.to_string(),
            })
        }
        None => parse_auto(input).ok_or_else(|| DateParseError::Unrecognized {
            input: input.to_string(),
        }),
    }
}

fn parse_with_format(input: &str, fmt: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_str(input, fmt) {
        return Some(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
        return Some(naive.and_utc().fixed_offset());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset());
    }
    None
}

fn parse_auto(input: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt);
    }
    for layout in DATETIME_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, layout) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(input, layout) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset());
        }
    }
    None
}

// ============================================================================
// TESTS
// ============================================================================
