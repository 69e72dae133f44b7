//! Numeric coercion and display helpers.
//!
//! # Invariants
//! - Coercion never fails and never yields NaN or infinity.
//! - Formatting is display-only; nothing parses its output back.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid number regex")
});

const MAX_FRACTION_DIGITS: usize = 3;

/// Maps non-finite values to zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Clamps overflowed results to `±f64::MAX`, keeping their sign.
///
/// NaN has no sign to keep and becomes zero.
pub fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-f64::MAX, f64::MAX)
    }
}

/// Coerces raw user text into a number.
///
/// Thousands separators are stripped, leading whitespace is skipped, and
/// the longest leading decimal literal is parsed. Text without a leading
/// number (including empty text) yields `0.0`.
pub fn coerce_number(raw: &str) -> f64 {
    let cleaned = raw.replace(',', "");
    LEADING_NUMBER_RE
        .find(cleaned.trim_start())
        .and_then(|found| found.as_str().parse::<f64>().ok())
        .map_or(0.0, finite_or_zero)
}

/// Formats a value with comma digit grouping and up to three fraction digits.
///
/// Zero and non-finite values render as an empty string.
pub fn format_number(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return String::new();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
