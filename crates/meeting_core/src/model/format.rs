//! Date and time field validators.
//!
//! # Invariants
//! - Dates are `YYYY-MM-DD` with month `01..=12` and day `01..=31`.
//!   Per-month lengths and leap years are not checked.
//! - Times are 24-hour `HH:MM` with hour `00..=23` and minute `00..=59`.
//! - Only ASCII digits are accepted.

use once_cell::sync::Lazy;
use regex::Regex;

/// Human-readable date format used in validation messages.
pub const DATE_FORMAT: &str = "YYYY-MM-DD";
/// Human-readable time format used in validation messages.
pub const TIME_FORMAT: &str = "HH:MM";

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$")
        .expect("date pattern is valid")
});

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("time pattern is valid")
});

/// Returns whether `value` is a bounded `YYYY-MM-DD` date.
pub fn validate_date(value: &str) -> bool {
    DATE_PATTERN.is_match(value)
}

/// Returns whether `value` is a bounded 24-hour `HH:MM` time.
pub fn validate_time(value: &str) -> bool {
    TIME_PATTERN.is_match(value)
}
