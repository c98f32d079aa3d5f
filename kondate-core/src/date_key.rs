//! Canonical day keys.
//!
//! Every date-indexed structure (the meal plan, the holiday calendar) is
//! keyed by the `YYYY-MM-DD` rendering of a local calendar day. Keys are
//! derived from the calendar fields only, so two instants on the same day
//! always map to the same key.

use chrono::{Datelike, NaiveDate};

/// A `YYYY-MM-DD` string identifying one calendar day.
pub type DateKey = String;

/// `chrono` format string matching [`to_key`].
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Renders the canonical key for a calendar day.
pub fn to_key(date: NaiveDate) -> DateKey {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Parses a key back into its calendar day.
///
/// Only canonical keys are accepted: `2024-3-1` parses as a date in chrono
/// but is not a key this module would ever produce, so it is rejected.
pub fn parse_key(key: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()?;
    (to_key(date) == key).then_some(date)
}
