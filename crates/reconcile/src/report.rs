//! Outcome of a reconciliation pass.

use chrono::NaiveDate;
use serde::Serialize;

use suhba_store::PostId;

/// A post whose stored day does not match the day of its date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Correction {
    pub id: PostId,
    pub date: NaiveDate,
    pub stored_day: u32,
    pub expected_day: u32,
}

/// A post whose correction could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub id: PostId,
    pub reason: String,
}

/// Aggregate result of [`reconcile`](crate::reconcile).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Posts looked at.
    pub examined: usize,
    /// Posts whose day was already right.
    pub unchanged: usize,
    /// Corrections that were written.
    pub corrected: Vec<Correction>,
    /// Corrections that could not be written.
    pub failed: Vec<Failure>,
}

impl ReconcileReport {
    /// Returns `true` if every needed correction was written.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_clean() {
        let report = ReconcileReport::default();
        assert!(report.is_clean());
        assert_eq!(report.examined, 0);
    }

    #[test]
    fn failures_make_it_dirty() {
        let report = ReconcileReport {
            examined: 1,
            failed: vec![Failure {
                id: PostId::new(1),
                reason: "down".to_string(),
            }],
            ..ReconcileReport::default()
        };
        assert!(!report.is_clean());
    }
}
