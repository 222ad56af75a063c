//! # suhba-calendar
//!
//! Countdown day numbering: conversions between calendar dates and the
//! descending day index (`total_days` down to 1) that leads up to the event.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CountdownConfig"] --> B["CountdownEngine"]
//!     K["Clock"] -->|".today()"| B
//!     B -->|".day_for_date()"| C["DayNumber (1..=total_days)"]
//!     C -->|".date_for_day()"| D["NaiveDate"]
//!     B -->|"calendar_cells()"| E["Vec of CalendarCell"]
//!     B -->|"DateReport / DateProbe"| F["diagnostics"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use suhba_calendar::{CountdownConfig, CountdownEngine, FixedClock, format_display_date};
//!
//! let event = NaiveDate::from_ymd_opt(2026, 2, 4).unwrap();
//! let config = CountdownConfig::new(event, 300).unwrap();
//! let today = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
//! let engine = CountdownEngine::with_clock(config, FixedClock::new(today));
//!
//! assert_eq!(engine.current_day_number().get(), 1);
//! assert_eq!(engine.days_remaining(), 1);
//!
//! let first = engine.date_for_day(300).unwrap();
//! assert_eq!(format_display_date(first), "April 10, 2025");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Immutable event date and day count |
//! | `day` | Day-number newtype |
//! | `clock` | Timezone policy for "today" |
//! | `engine` | Date and day-number conversions |
//! | `cells` | Calendar grid generation |
//! | `format` | Display formatting and date parsing |
//! | `report` | Diagnostic snapshots |
//! | `error` | Error types |

mod cells;
mod clock;
mod config;
mod day;
mod engine;
mod error;
mod format;
mod report;

pub use cells::{CalendarCell, calendar_cells};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::CountdownConfig;
pub use day::DayNumber;
pub use engine::CountdownEngine;
pub use error::CountdownError;
pub use format::{format_display_date, parse_date};
pub use report::{DateProbe, DateReport, LabelledDate};
