//! Date formatting for the map application interchange format
//!
//! The hidden-date field travels as "YYYY-MM-DDT" with a trailing time
//! designator and nothing after it. Formatting is a pure function, so
//! concurrent export calls share no formatter state.

use chrono::NaiveDate;

/// Formats a date as the map application expects: `%Y-%m-%dT`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%dT").to_string()
}
