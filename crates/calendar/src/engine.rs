//! Conversions between calendar dates and countdown day numbers.

use chrono::{Days, NaiveDate};
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::CountdownConfig;
use crate::day::DayNumber;
use crate::error::CountdownError;

/// Countdown date engine.
///
/// Every method is a pure function of the configuration, its arguments and,
/// for the "today" methods, the date reported by the clock. Nothing is cached.
#[derive(Debug, Clone)]
pub struct CountdownEngine<C = SystemClock> {
    config: CountdownConfig,
    clock: C,
}

impl CountdownEngine<SystemClock> {
    /// Creates an engine reading today's date from the UTC wall clock.
    pub fn new(config: CountdownConfig) -> Self {
        Self::with_clock(config, SystemClock::utc())
    }
}

impl<C: Clock> CountdownEngine<C> {
    /// Creates an engine reading today's date from `clock`.
    pub fn with_clock(config: CountdownConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &CountdownConfig {
        &self.config
    }

    /// Returns today's calendar date according to the clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Returns the day number for today.
    ///
    /// Dates before the countdown report day `total_days`; dates on or after
    /// the event report day 1.
    pub fn current_day_number(&self) -> DayNumber {
        self.day_number_on(self.today())
    }

    /// Returns the day number [`current_day_number`](Self::current_day_number)
    /// would report if today were `today`.
    pub fn day_number_on(&self, today: NaiveDate) -> DayNumber {
        let total = i64::from(self.config.total_days());
        let elapsed = self.days_since_start(today);
        let clamped = elapsed.clamp(0, total - 1);
        let day = DayNumber::from_clamped((total - clamped) as u32);
        debug!(%today, elapsed, %day, "computed current day number");
        day
    }

    /// Returns the day number assigned to `date`, saturating at both ends.
    ///
    /// The result never increases as `date` advances.
    pub fn day_for_date(&self, date: NaiveDate) -> DayNumber {
        let total = i64::from(self.config.total_days());
        let day = (total - self.days_since_start(date)).clamp(1, total);
        DayNumber::from_clamped(day as u32)
    }

    /// Validates a raw day number against this countdown.
    ///
    /// # Errors
    ///
    /// Returns [`CountdownError::DayOutOfRange`] if `day` is not in
    /// `1..=total_days`.
    pub fn day(&self, day: i64) -> Result<DayNumber, CountdownError> {
        DayNumber::new(day, self.config.total_days())
    }

    /// Returns the calendar date of `day`.
    ///
    /// # Errors
    ///
    /// Returns [`CountdownError::DayOutOfRange`] if `day` is not in
    /// `1..=total_days`. No substitute date is ever returned.
    pub fn date_for_day(&self, day: i64) -> Result<NaiveDate, CountdownError> {
        let day = self.day(day).inspect_err(|e| {
            warn!(error = %e, "rejected day number");
        })?;
        Ok(self.date_of(day))
    }

    /// Returns the calendar date of an already-validated day.
    pub(crate) fn date_of(&self, day: DayNumber) -> NaiveDate {
        let offset = day.offset_from_start(self.config.total_days());
        // start + offset <= event - 1, which is representable.
        self.config.start_date() + Days::new(u64::from(offset))
    }

    /// Returns the whole days from today to the event, floored at zero.
    pub fn days_remaining(&self) -> u32 {
        self.days_remaining_on(self.today())
    }

    /// Returns the whole days from `date` to the event, floored at zero.
    ///
    /// Inside the countdown window this equals the day number of `date`.
    pub fn days_remaining_on(&self, date: NaiveDate) -> u32 {
        let remaining = (self.config.event_date() - date).num_days().max(0);
        u32::try_from(remaining).unwrap_or(u32::MAX)
    }

    /// Signed whole days from the countdown start to `date`.
    pub fn days_since_start(&self, date: NaiveDate) -> i64 {
        (date - self.config.start_date()).num_days()
    }
}
