//! Display formatting and parsing of calendar dates.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::CountdownError;

/// Formats `date` as a long-form English date, e.g. `"April 10, 2025"`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Parses a calendar date from user input.
///
/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp which is reduced to its UTC
/// calendar date. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`CountdownError::MalformedDate`] for anything else, including
/// impossible dates such as `2025-02-30`.
pub fn parse_date(input: &str) -> Result<NaiveDate, CountdownError> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|ts| ts.with_timezone(&Utc).date_naive())
        .map_err(|_| CountdownError::MalformedDate {
            input: input.to_string(),
        })
}
