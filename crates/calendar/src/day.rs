//! Day-number newtype for the countdown.

use std::fmt;

use serde::Serialize;

use crate::error::CountdownError;

/// A countdown day number in `1..=total_days`.
///
/// Day numbers decrease as calendar time advances: the highest number is the
/// first day of the countdown and day 1 is the day before the event. The
/// upper bound belongs to a [`CountdownConfig`](crate::CountdownConfig), so a
/// `DayNumber` is only meaningful alongside the configuration that produced it.
/// For the same reason it serializes as a plain integer but cannot be
/// deserialized; parse raw input through [`DayNumber::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DayNumber(u32);

impl DayNumber {
    /// Creates a `DayNumber`, checking it against `total_days`.
    ///
    /// # Errors
    ///
    /// Returns [`CountdownError::DayOutOfRange`] if `day` is not in
    /// `1..=total_days`.
    pub fn new(day: i64, total_days: u32) -> Result<Self, CountdownError> {
        if day < 1 || day > i64::from(total_days) {
            return Err(CountdownError::DayOutOfRange { day, total_days });
        }
        // In range 1..=u32::MAX by the check above.
        Ok(Self(day as u32))
    }

    /// Builds a day number the engine has already clamped into range.
    pub(crate) fn from_clamped(day: u32) -> Self {
        debug_assert!(day >= 1);
        Self(day)
    }

    /// Returns the inner day number.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Days between the first day of the countdown and this one.
    ///
    /// Floors at zero for a day number above `total_days`.
    pub(crate) fn offset_from_start(self, total_days: u32) -> u32 {
        total_days.saturating_sub(self.0)
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DayNumber> for u32 {
    fn from(day: DayNumber) -> Self {
        day.0
    }
}
