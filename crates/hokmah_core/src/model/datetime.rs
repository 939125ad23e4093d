//! Date/time patterns shared by command parsing, display and records.
//!
//! # Invariants
//! - Input and record timestamps use exactly one strict pattern.
//! - Parsing never falls back to a looser pattern.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// User-facing spelling of the accepted input pattern.
pub const DATE_INPUT_HINT: &str = "yyyy-MM-dd HHmm";
/// chrono pattern for command input and save-file records.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d %H%M";
/// chrono pattern for human-readable task descriptions.
pub const DATE_DISPLAY_FORMAT: &str = "%b %-d %Y %H:%M";

// chrono accepts single-digit fields and signed years; the shape check
// pins exact widths first.
static DATE_INPUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{4}$").expect("valid date regex"));

/// Parses one timestamp in the strict `yyyy-MM-dd HHmm` pattern.
///
/// Returns `None` for any value that does not match exactly, including
/// surrounding whitespace and out-of-range calendar or clock fields.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    if !DATE_INPUT_RE.is_match(value) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, DATE_INPUT_FORMAT).ok()
}

/// Formats a timestamp in the record/input pattern.
pub fn format_machine(value: &NaiveDateTime) -> String {
    value.format(DATE_INPUT_FORMAT).to_string()
}

/// Formats a timestamp for task descriptions, e.g. `Dec 31 2023 23:59`.
pub fn format_display(value: &NaiveDateTime) -> String {
    value.format(DATE_DISPLAY_FORMAT).to_string()
}
