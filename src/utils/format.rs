//! Display formatting for counts and dollar amounts (en-US).

use num_format::{Locale, ToFormattedString};

/// Rounds to a whole number and adds thousands separators.
///
/// Negative and non-finite values are not expected here; they format as `0`.
pub fn format_count(value: f64) -> String {
    let whole = if value.is_finite() { value.round() } else { 0.0 };
    (whole as u64).to_formatted_string(&Locale::en)
}

/// Formats a dollar amount, abbreviating thousands and millions.
///
/// ```ignore
/// assert_eq!(format_dollars(2_160_000.0), "$2.2M");
/// assert_eq!(format_dollars(995_328.0), "$995.3K");
/// assert_eq!(format_dollars(1_000.0), "$1K");
/// assert_eq!(format_dollars(999.0), "$999");
/// ```
pub fn format_dollars(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${}M", one_decimal(value / 1_000_000.0))
    } else if value >= 1_000.0 {
        format!("${}K", one_decimal(value / 1_000.0))
    } else {
        format_dollars_full(value)
    }
}

/// Formats a dollar amount as a whole number with separators.
pub fn format_dollars_full(value: f64) -> String {
    format!("${}", format_count(value))
}

/// One decimal place, with a trailing `.0` dropped.
fn one_decimal(value: f64) -> String {
    let formatted = format!("{value:.1}");
    match formatted.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}
