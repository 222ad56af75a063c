//! Error types for the suhba-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the suhba-calendar crate.
///
/// Every variant is a recoverable input-validation failure: the engine
/// itself clamps rather than rejects wherever a total answer exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountdownError {
    /// Returned when a countdown is configured with zero days.
    #[error("invalid total days: {total_days} (must be >= 1)")]
    InvalidTotalDays {
        /// The invalid day count that was provided.
        total_days: u32,
    },

    /// Returned when the start date would fall outside the supported date range.
    #[error("countdown of {total_days} days before {event_date} starts before the earliest supported date")]
    StartDateOutOfRange {
        /// The configured event date.
        event_date: NaiveDate,
        /// The configured day count.
        total_days: u32,
    },

    /// Returned when a day number is outside `1..=total_days`.
    #[error("invalid day number: {day} (must be 1..={total_days})")]
    DayOutOfRange {
        /// The rejected day number.
        day: i64,
        /// Upper bound of the countdown.
        total_days: u32,
    },

    /// Returned when a date string cannot be parsed.
    #[error("malformed date {input:?}: expected YYYY-MM-DD or an RFC 3339 timestamp")]
    MalformedDate {
        /// The text that failed to parse.
        input: String,
    },
}
