//! Parameterized predicate tables.
//!
//! One rstest table per predicate family, driving each check through a
//! real session so trimming and chain bookkeeping are exercised too.

use fieldcheck::prelude::*;
use rstest::rstest;
use serde_json::json;

/// Runs a single predicate against `value` and reports whether it passed.
fn passes(value: serde_json::Value, check: impl FnOnce(&mut Chain) -> &mut Chain) -> bool {
    let mut session = Session::from_json(&json!({ "field": value })).expect("object source");
    check(session.validate("field", false));
    !session.has_failures_for("field")
}

#[rstest]
#[case(json!("user@example.com"), true)]
#[case(json!("first.last+tag@sub.example.co"), true)]
#[case(json!("@example.com"), false)]
#[case(json!("user@"), false)]
#[case(json!("no-at-sign"), false)]
#[case(json!(42), false)]
fn email_shapes(#[case] value: serde_json::Value, #[case] expected: bool) {
    assert_eq!(passes(value, |c| c.is_email("bad email")), expected);
}

#[rstest]
#[case(json!("https://example.com"), true)]
#[case(json!("http://example.com/a/b?q=1"), true)]
#[case(json!("ftp://example.com"), false)]
#[case(json!("example.com"), false)]
fn url_shapes(#[case] value: serde_json::Value, #[case] expected: bool) {
    assert_eq!(passes(value, |c| c.is_url("bad url")), expected);
}

#[rstest]
#[case(json!("19"), true)]
#[case(json!("-5"), true)]
#[case(json!("007"), false)] // leading zeros are not canonical
#[case(json!("1.5"), false)]
#[case(json!(19), true)] // native int accepted
#[case(json!(19.0), true)] // integral float accepted
#[case(json!(19.5), false)]
fn int_shapes(#[case] value: serde_json::Value, #[case] expected: bool) {
    assert_eq!(passes(value, |c| c.is_int("bad int")), expected);
}

#[rstest]
#[case(json!("1.5"), true)]
#[case(json!(".5"), true)]
#[case(json!("1e3"), true)]
#[case(json!("1.2.3"), false)]
#[case(json!(1.5), false)] // string-shape test only
fn float_shapes(#[case] value: serde_json::Value, #[case] expected: bool) {
    assert_eq!(passes(value, |c| c.is_float("bad float")), expected);
}

#[rstest]
#[case(json!("abc"), true)]
#[case(json!("abC"), true)]
#[case(json!("ab c"), false)]
#[case(json!("ab1"), false)]
#[case(json!(""), false)]
fn alpha_shapes(#[case] value: serde_json::Value, #[case] expected: bool) {
    assert_eq!(passes(value, |c| c.is_alpha("not alpha")), expected);
}

#[rstest]
#[case(json!("#fff"), true)]
#[case(json!("1A2B3C"), true)]
#[case(json!("#12345"), false)]
#[case(json!("red"), false)]
fn hexcolor_shapes(#[case] value: serde_json::Value, #[case] expected: bool) {
    assert_eq!(passes(value, |c| c.is_hexcolor("not a color")), expected);
}

#[rstest]
#[case(json!("2021-03-04"), true)]
#[case(json!("2021-03-04T05:06:07Z"), true)]
#[case(json!("04.03.2021"), true)]
#[case(json!("soon"), false)]
#[case(json!("2021-13-40"), false)]
fn date_shapes(#[case] value: serde_json::Value, #[case] expected: bool) {
    assert_eq!(passes(value, |c| c.is_date_format("not a date")), expected);
}

#[rstest]
#[case(json!(null), false, true)] // loose null, not strict-defined
#[case(json!(0), true, true)]
#[case(json!(""), false, true)]
#[case(json!("x"), true, true)]
fn presence_checks(
    #[case] value: serde_json::Value,
    #[case] has_value: bool,
    #[case] is_defined: bool,
) {
    assert_eq!(passes(value.clone(), |c| c.has_value("m")), has_value);
    assert_eq!(passes(value, |c| c.is_defined("m")), is_defined);
}

#[rstest]
#[case(json!("19"), 17.0, true)]
#[case(json!("15"), 17.0, false)]
#[case(json!(18), 17.0, true)]
#[case(json!("abc"), 17.0, false)] // NaN comparisons fail
fn greater_than_coerces(
    #[case] value: serde_json::Value,
    #[case] bound: f64,
    #[case] expected: bool,
) {
    assert_eq!(passes(value, |c| c.greater_than(bound, "m")), expected);
}
