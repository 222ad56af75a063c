//! Immutable countdown configuration.

use chrono::{Days, NaiveDate};

use crate::error::CountdownError;

/// The fixed parameters of a countdown: the event date and how many days
/// lead up to it.
///
/// Day `total_days` is the first (earliest) day of the countdown and day 1
/// is the day before the event, so the countdown window `[start, event)`
/// holds exactly `total_days` calendar dates.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use suhba_calendar::CountdownConfig;
///
/// let event = NaiveDate::from_ymd_opt(2026, 2, 4).unwrap();
/// let config = CountdownConfig::new(event, 300).unwrap();
/// assert_eq!(config.start_date(), NaiveDate::from_ymd_opt(2025, 4, 10).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountdownConfig {
    event_date: NaiveDate,
    total_days: u32,
    start_date: NaiveDate,
}

impl CountdownConfig {
    /// Creates a configuration counting `total_days` days down to `event_date`.
    ///
    /// # Errors
    ///
    /// Returns [`CountdownError::InvalidTotalDays`] if `total_days` is zero and
    /// [`CountdownError::StartDateOutOfRange`] if the start date cannot be
    /// represented.
    pub fn new(event_date: NaiveDate, total_days: u32) -> Result<Self, CountdownError> {
        if total_days == 0 {
            return Err(CountdownError::InvalidTotalDays { total_days });
        }
        let start_date = event_date
            .checked_sub_days(Days::new(u64::from(total_days)))
            .ok_or(CountdownError::StartDateOutOfRange {
                event_date,
                total_days,
            })?;
        Ok(Self {
            event_date,
            total_days,
            start_date,
        })
    }

    /// Returns the event date the countdown ends at.
    pub fn event_date(&self) -> NaiveDate {
        self.event_date
    }

    /// Returns the number of days in the countdown.
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Returns the date of day `total_days`, the earliest day of the countdown.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the last date inside the countdown window (day 1).
    pub fn last_date(&self) -> NaiveDate {
        // start + (total_days - 1) never passes event_date, which is representable.
        self.event_date.pred_opt().unwrap_or(self.event_date)
    }

    /// Returns `true` if `date` falls inside `[start, event)`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date < self.event_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn start_date_is_total_days_before_event() {
        let config = CountdownConfig::new(ymd(2026, 2, 4), 300).unwrap();
        assert_eq!(config.start_date(), ymd(2025, 4, 10));
        assert_eq!(config.last_date(), ymd(2026, 2, 3));
        assert_eq!(config.total_days(), 300);
        assert_eq!(config.event_date(), ymd(2026, 2, 4));
    }

    #[test]
    fn single_day_countdown() {
        let config = CountdownConfig::new(ymd(2024, 3, 1), 1).unwrap();
        assert_eq!(config.start_date(), ymd(2024, 2, 29));
        assert_eq!(config.last_date(), ymd(2024, 2, 29));
    }

    #[test]
    fn zero_days_rejected() {
        assert_eq!(
            CountdownConfig::new(ymd(2026, 2, 4), 0).unwrap_err(),
            CountdownError::InvalidTotalDays { total_days: 0 }
        );
    }

    #[test]
    fn start_before_min_date_rejected() {
        let err = CountdownConfig::new(NaiveDate::MIN, 10).unwrap_err();
        assert!(matches!(err, CountdownError::StartDateOutOfRange { total_days: 10, .. }));
    }

    #[test]
    fn contains_is_half_open() {
        let config = CountdownConfig::new(ymd(2026, 2, 4), 300).unwrap();
        assert!(config.contains(ymd(2025, 4, 10)));
        assert!(config.contains(ymd(2026, 2, 3)));
        assert!(!config.contains(ymd(2025, 4, 9)));
        assert!(!config.contains(ymd(2026, 2, 4)));
    }
}
