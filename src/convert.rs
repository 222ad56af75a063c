//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use chrono::{FixedOffset, NaiveDate, Offset, Utc};

use suhba_calendar::{Clock, CountdownConfig, CountdownEngine, FixedClock, SystemClock, parse_date};

use crate::config::{CountdownToml, SuhbaConfig};

/// The clock a command runs against: the wall clock, or a date pinned with
/// `--today`.
#[derive(Debug, Clone, Copy)]
pub enum AppClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for AppClock {
    fn today(&self) -> NaiveDate {
        match self {
            Self::System(c) => c.today(),
            Self::Fixed(c) => c.today(),
        }
    }
}

/// Parses a UTC offset such as `+03:00`, `-0500`, `Z` or `UTC`.
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset> {
    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
        return Ok(Utc.fix());
    }
    match trimmed.parse::<FixedOffset>() {
        Ok(offset) => Ok(offset),
        Err(_) => bail!("unknown UTC offset: {s:?} (expected e.g. \"+03:00\")"),
    }
}

/// Builds a [`CountdownConfig`] from the TOML countdown section.
pub fn build_countdown_config(countdown: &CountdownToml) -> Result<CountdownConfig> {
    let event_date = parse_date(&countdown.event_date).context("invalid [countdown].event_date")?;
    CountdownConfig::new(event_date, countdown.total_days).context("invalid [countdown] section")
}

/// Builds the clock, honouring a `--today` override.
pub fn build_clock(countdown: &CountdownToml, today: Option<&str>) -> Result<AppClock> {
    if let Some(today) = today {
        let date = parse_date(today).context("invalid --today")?;
        return Ok(AppClock::Fixed(FixedClock::new(date)));
    }
    let offset = parse_utc_offset(&countdown.utc_offset).context("invalid [countdown].utc_offset")?;
    Ok(AppClock::System(SystemClock::with_offset(offset)))
}

/// Builds the countdown engine for a command.
pub fn build_engine(config: &SuhbaConfig, today: Option<&str>) -> Result<CountdownEngine<AppClock>> {
    let countdown = build_countdown_config(&config.countdown)?;
    let clock = build_clock(&config.countdown, today)?;
    Ok(CountdownEngine::with_clock(countdown, clock))
}
