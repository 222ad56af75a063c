//! Calendar cell generation for the countdown grid.

use chrono::NaiveDate;
use serde::Serialize;

use crate::clock::Clock;
use crate::day::DayNumber;
use crate::engine::CountdownEngine;

/// One cell of the countdown calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    /// Day number of the cell.
    pub day: DayNumber,
    /// Calendar date of the cell.
    pub date: NaiveDate,
    /// Whether this is today's cell.
    pub is_today: bool,
    /// Days from the cell's date to the event.
    pub days_remaining: u32,
}

/// Generates every cell of the countdown, from day `total_days` down to day 1.
///
/// Exactly one cell is marked as today: the one matching
/// [`CountdownEngine::current_day_number`], which saturates outside the
/// window.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use suhba_calendar::{CountdownConfig, CountdownEngine, FixedClock, calendar_cells};
///
/// let event = NaiveDate::from_ymd_opt(2026, 2, 4).unwrap();
/// let config = CountdownConfig::new(event, 300).unwrap();
/// let engine = CountdownEngine::with_clock(config, FixedClock::new(event));
/// let cells = calendar_cells(&engine);
/// assert_eq!(cells.len(), 300);
/// assert_eq!(cells[0].day.get(), 300);
/// ```
pub fn calendar_cells<C: Clock>(engine: &CountdownEngine<C>) -> Vec<CalendarCell> {
    let total_days = engine.config().total_days();
    let today = engine.current_day_number();
    (1..=total_days)
        .rev()
        .map(|raw| {
            let day = DayNumber::from_clamped(raw);
            let date = engine.date_of(day);
            CalendarCell {
                day,
                date,
                is_today: day == today,
                days_remaining: engine.days_remaining_on(date),
            }
        })
        .collect()
}
