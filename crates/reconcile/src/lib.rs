//! # suhba-reconcile
//!
//! Batch maintenance that keeps stored post day numbers consistent with the
//! countdown calendar.
//!
//! ```
//! use chrono::NaiveDate;
//! use suhba_calendar::{CountdownConfig, CountdownEngine, FixedClock};
//! use suhba_reconcile::reconcile;
//! use suhba_store::{MemoryStore, NewPost, PostStore};
//!
//! let event = NaiveDate::from_ymd_opt(2026, 2, 4).unwrap();
//! let engine = CountdownEngine::with_clock(
//!     CountdownConfig::new(event, 300).unwrap(),
//!     FixedClock::new(event),
//! );
//!
//! let mut store = MemoryStore::new();
//! let date = NaiveDate::from_ymd_opt(2025, 4, 11).unwrap();
//! store.insert(NewPost::new(1, date, "Day 299", "hd.jpg")).unwrap();
//!
//! let report = reconcile(&mut store, &engine).unwrap();
//! assert_eq!(report.corrected.len(), 1);
//! assert_eq!(store.all().unwrap()[0].day, 299);
//! ```

mod reconcile;
mod report;

pub use reconcile::{plan, reconcile};
pub use report::{Correction, Failure, ReconcileReport};
