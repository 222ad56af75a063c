//! Diagnostic snapshots of the countdown arithmetic.

use chrono::NaiveDate;
use serde::Serialize;

use crate::clock::Clock;
use crate::day::DayNumber;
use crate::engine::CountdownEngine;
use crate::format::format_display_date;

/// A date alongside its display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelledDate {
    pub date: NaiveDate,
    pub display: String,
}

impl From<NaiveDate> for LabelledDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            date,
            display: format_display_date(date),
        }
    }
}

/// Where the countdown stands today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateReport {
    pub today: LabelledDate,
    pub start_date: LabelledDate,
    pub event_date: LabelledDate,
    pub current_day: DayNumber,
    pub total_days: u32,
    pub days_remaining: u32,
    pub date_for_current_day: LabelledDate,
}

impl DateReport {
    /// Captures the engine's view of today.
    pub fn new<C: Clock>(engine: &CountdownEngine<C>) -> Self {
        let config = engine.config();
        // Read the clock once so every field agrees on "today".
        let today = engine.today();
        let current_day = engine.day_number_on(today);
        Self {
            today: today.into(),
            start_date: config.start_date().into(),
            event_date: config.event_date().into(),
            current_day,
            total_days: config.total_days(),
            days_remaining: engine.days_remaining_on(today),
            date_for_current_day: engine.date_of(current_day).into(),
        }
    }
}

/// The countdown arithmetic for an arbitrary date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateProbe {
    pub date: LabelledDate,
    pub day_number: DayNumber,
    pub in_window: bool,
    pub days_until_event: u32,
    pub days_since_start: u32,
}

impl DateProbe {
    /// Evaluates the day-number math for `date`.
    pub fn new<C: Clock>(engine: &CountdownEngine<C>, date: NaiveDate) -> Self {
        let since_start = engine.days_since_start(date).max(0);
        Self {
            date: date.into(),
            day_number: engine.day_for_date(date),
            in_window: engine.config().contains(date),
            days_until_event: engine.days_remaining_on(date),
            days_since_start: u32::try_from(since_start).unwrap_or(u32::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::CountdownConfig;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine_on(today: NaiveDate) -> CountdownEngine<FixedClock> {
        let config = CountdownConfig::new(ymd(2026, 2, 4), 300).unwrap();
        CountdownEngine::with_clock(config, FixedClock::new(today))
    }

    #[test]
    fn report_mid_countdown() {
        let report = DateReport::new(&engine_on(ymd(2025, 4, 11)));
        assert_eq!(report.today.display, "April 11, 2025");
        assert_eq!(report.start_date.display, "April 10, 2025");
        assert_eq!(report.event_date.display, "February 4, 2026");
        assert_eq!(report.current_day.get(), 299);
        assert_eq!(report.total_days, 300);
        assert_eq!(report.days_remaining, 299);
        assert_eq!(report.date_for_current_day.date, ymd(2025, 4, 11));
    }

    #[test]
    fn report_after_event() {
        let report = DateReport::new(&engine_on(ymd(2026, 3, 1)));
        assert_eq!(report.current_day.get(), 1);
        assert_eq!(report.days_remaining, 0);
        assert_eq!(report.date_for_current_day.date, ymd(2026, 2, 3));
    }

    #[test]
    fn probe_before_start() {
        let probe = DateProbe::new(&engine_on(ymd(2025, 6, 1)), ymd(2025, 1, 1));
        assert_eq!(probe.day_number.get(), 300);
        assert!(!probe.in_window);
        assert_eq!(probe.days_since_start, 0);
        assert_eq!(probe.days_until_event, 399);
    }

    #[test]
    fn probe_inside_window() {
        let probe = DateProbe::new(&engine_on(ymd(2025, 6, 1)), ymd(2026, 2, 3));
        assert_eq!(probe.day_number.get(), 1);
        assert!(probe.in_window);
        assert_eq!(probe.days_since_start, 299);
        assert_eq!(probe.days_until_event, 1);
    }

    #[test]
    fn report_serializes() {
        let report = DateReport::new(&engine_on(ymd(2025, 4, 10)));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["current_day"], 300);
        assert_eq!(json["start_date"]["date"], "2025-04-10");
        assert_eq!(json["start_date"]["display"], "April 10, 2025");
    }
}
