//! Integration tests: reconciliation across a whole store.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use suhba_calendar::{CountdownConfig, CountdownEngine, FixedClock};
use suhba_reconcile::{plan, reconcile};
use suhba_store::{
    MemoryStore, NewPost, PostId, PostStore, PostUpdate, StatusPost, StoreError,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn engine() -> CountdownEngine<FixedClock> {
    let config = CountdownConfig::new(ymd(2026, 2, 4), 300).unwrap();
    CountdownEngine::with_clock(config, FixedClock::new(ymd(2025, 9, 1)))
}

/// One post per day for the first 20 days, every third one tagged wrong.
fn drifted_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    for offset in 0..20u32 {
        let date = ymd(2025, 4, 10) + Days::new(u64::from(offset));
        let correct = 300 - offset;
        let day = if offset % 3 == 0 { correct + 1 } else { correct };
        store
            .insert(NewPost::new(day, date, format!("post {offset}"), "hd.jpg"))
            .unwrap();
    }
    store
}

/// Wraps a store and fails updates for chosen ids.
struct Flaky {
    inner: MemoryStore,
    broken: HashSet<PostId>,
}

impl PostStore for Flaky {
    fn all(&self) -> Result<Vec<StatusPost>, StoreError> {
        self.inner.all()
    }

    fn get(&self, id: PostId) -> Result<Option<StatusPost>, StoreError> {
        self.inner.get(id)
    }

    fn insert(&mut self, post: NewPost) -> Result<StatusPost, StoreError> {
        self.inner.insert(post)
    }

    fn update(&mut self, id: PostId, update: &PostUpdate) -> Result<bool, StoreError> {
        if self.broken.contains(&id) {
            return Err(StoreError::Unavailable {
                reason: format!("record {id} locked"),
            });
        }
        self.inner.update(id, update)
    }

    fn delete(&mut self, id: PostId) -> Result<bool, StoreError> {
        self.inner.delete(id)
    }
}

/// A store whose listing always fails.
struct Offline;

impl PostStore for Offline {
    fn all(&self) -> Result<Vec<StatusPost>, StoreError> {
        Err(StoreError::Unavailable {
            reason: "connection refused".to_string(),
        })
    }

    fn get(&self, _id: PostId) -> Result<Option<StatusPost>, StoreError> {
        Ok(None)
    }

    fn insert(&mut self, _post: NewPost) -> Result<StatusPost, StoreError> {
        Err(StoreError::Unavailable {
            reason: "connection refused".to_string(),
        })
    }

    fn update(&mut self, _id: PostId, _update: &PostUpdate) -> Result<bool, StoreError> {
        Ok(false)
    }

    fn delete(&mut self, _id: PostId) -> Result<bool, StoreError> {
        Ok(false)
    }
}

#[test]
fn corrects_every_drifted_post() {
    let mut store = drifted_store();
    let report = reconcile(&mut store, &engine()).unwrap();
    assert_eq!(report.examined, 20);
    assert_eq!(report.corrected.len(), 7);
    assert_eq!(report.unchanged, 13);
    assert!(report.is_clean());

    let engine = engine();
    for post in store.all().unwrap() {
        assert_eq!(post.day, engine.day_for_date(post.date).get());
    }
}

#[test]
fn second_pass_writes_nothing() {
    let mut store = drifted_store();
    reconcile(&mut store, &engine()).unwrap();
    let stamps: Vec<_> = store.all().unwrap().iter().map(|p| p.updated_at).collect();

    let second = reconcile(&mut store, &engine()).unwrap();
    assert!(second.corrected.is_empty());
    assert!(second.failed.is_empty());
    assert_eq!(second.unchanged, 20);
    let after: Vec<_> = store.all().unwrap().iter().map(|p| p.updated_at).collect();
    assert_eq!(stamps, after);
}

#[test]
fn plan_matches_what_reconcile_writes() {
    let mut store = drifted_store();
    let planned = plan(&store, &engine()).unwrap();
    let report = reconcile(&mut store, &engine()).unwrap();
    assert_eq!(planned, report.corrected);
}

#[test]
fn one_failure_does_not_stop_the_batch() {
    let inner = drifted_store();
    let drifted: Vec<PostId> = plan(&inner, &engine())
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    let broken_id = drifted[0];
    let mut store = Flaky {
        inner,
        broken: HashSet::from([broken_id]),
    };

    let report = reconcile(&mut store, &engine()).unwrap();
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].id, broken_id);
    assert!(report.failed[0].reason.contains("locked"));
    assert_eq!(report.corrected.len(), drifted.len() - 1);
    assert!(!report.is_clean());

    let remaining = plan(&store, &engine()).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, broken_id);
}

#[test]
fn listing_failure_aborts() {
    let err = reconcile(&mut Offline, &engine()).unwrap_err();
    assert!(matches!(err, StoreError::Unavailable { .. }));
}
