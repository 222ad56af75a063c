//! Correct stored day numbers against the countdown calendar.

use tracing::{debug, info, info_span, warn};

use suhba_calendar::{Clock, CountdownEngine};
use suhba_store::{PostStore, StatusPost, StoreError};

use crate::report::{Correction, Failure, ReconcileReport};

/// Computes the corrections [`reconcile`] would make, without writing.
///
/// # Errors
///
/// Returns the store's error if the posts cannot be listed.
pub fn plan<S, C>(store: &S, engine: &CountdownEngine<C>) -> Result<Vec<Correction>, StoreError>
where
    S: PostStore + ?Sized,
    C: Clock,
{
    let posts = store.all()?;
    Ok(posts
        .iter()
        .filter_map(|post| correction_for(post, engine))
        .collect())
}

/// Retags every post whose stored day differs from the day of its date.
///
/// Posts are handled one at a time. A failed update is logged, recorded in
/// the report and does not stop the remaining posts from being processed.
/// Running this twice in a row makes no writes on the second pass.
///
/// # Errors
///
/// Returns the store's error only if the posts cannot be listed.
pub fn reconcile<S, C>(
    store: &mut S,
    engine: &CountdownEngine<C>,
) -> Result<ReconcileReport, StoreError>
where
    S: PostStore + ?Sized,
    C: Clock,
{
    let _span = info_span!("reconcile").entered();
    let posts = store.all()?;
    let mut report = ReconcileReport::default();

    for post in &posts {
        report.examined += 1;
        let Some(correction) = correction_for(post, engine) else {
            report.unchanged += 1;
            continue;
        };

        match store.set_day(correction.id, correction.expected_day) {
            Ok(true) => {
                info!(
                    id = %correction.id,
                    from = correction.stored_day,
                    to = correction.expected_day,
                    "corrected post day"
                );
                report.corrected.push(correction);
            }
            Ok(false) => {
                warn!(id = %correction.id, "post disappeared before it could be corrected");
                report.failed.push(Failure {
                    id: correction.id,
                    reason: "post no longer exists".to_string(),
                });
            }
            Err(e) => {
                warn!(id = %correction.id, error = %e, "failed to correct post day");
                report.failed.push(Failure {
                    id: correction.id,
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        examined = report.examined,
        corrected = report.corrected.len(),
        failed = report.failed.len(),
        "reconciliation finished"
    );
    Ok(report)
}

fn correction_for<C: Clock>(post: &StatusPost, engine: &CountdownEngine<C>) -> Option<Correction> {
    let expected = engine.day_for_date(post.date).get();
    if post.day == expected {
        return None;
    }
    debug!(id = %post.id, date = %post.date, stored = post.day, expected, "day drift");
    Some(Correction {
        id: post.id,
        date: post.date,
        stored_day: post.day,
        expected_day: expected,
    })
}
