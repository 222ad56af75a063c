//! Sources of "today".

use chrono::{FixedOffset, NaiveDate, Offset, Utc};

/// Supplies the current calendar date to a countdown engine.
///
/// Time of day never matters to the countdown; implementations return the
/// calendar date already truncated in whatever timezone policy they follow.
pub trait Clock {
    /// Returns today's calendar date.
    fn today(&self) -> NaiveDate;
}

/// Wall clock anchored to an explicit fixed UTC offset.
///
/// The default offset is UTC, so the same instant yields the same day number
/// regardless of the server's local timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// A wall clock reading the UTC calendar date.
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    /// A wall clock reading the calendar date at `offset`.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Returns the UTC offset this clock truncates in.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

/// A clock frozen on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Creates a clock that always reports `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
