use chrono::NaiveDate;
use suhba_store::{MemoryStore, NewPost, PostStore};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Days 10..=1 with day 7 and day 4 unpublished.
fn seeded() -> MemoryStore {
    let mut store = MemoryStore::new();
    for day in 1..=10u32 {
        let date = ymd(2026, 2, 4) - chrono::Days::new(u64::from(day));
        let post = NewPost::new(day, date, format!("Day {day}"), format!("hd/{day}.jpg"))
            .with_published(day != 7 && day != 4);
        store.insert(post).unwrap();
    }
    store
}

#[test]
fn all_is_day_descending() {
    let days: Vec<u32> = seeded().all().unwrap().iter().map(|p| p.day).collect();
    assert_eq!(days, (1..=10).rev().collect::<Vec<_>>());
}

#[test]
fn recent_skips_unpublished() {
    let days: Vec<u32> = seeded().recent(4).unwrap().iter().map(|p| p.day).collect();
    assert_eq!(days, vec![10, 9, 8, 6]);
}

#[test]
fn recent_zero_is_empty() {
    assert!(seeded().recent(0).unwrap().is_empty());
}

#[test]
fn by_day_finds_unpublished_too() {
    let store = seeded();
    assert_eq!(store.by_day(7).unwrap().unwrap().title, "Day 7");
    assert!(store.by_day(11).unwrap().is_none());
}

#[test]
fn by_day_prefers_lowest_id_on_duplicates() {
    let mut store = seeded();
    let dup = store
        .insert(NewPost::new(5, ymd(2026, 1, 1), "duplicate", "dup.jpg"))
        .unwrap();
    let found = store.by_day(5).unwrap().unwrap();
    assert_ne!(found.id, dup.id);
    assert_eq!(found.title, "Day 5");
}

#[test]
fn today_post_exact_match() {
    assert_eq!(seeded().today_post(8).unwrap().unwrap().day, 8);
}

#[test]
fn today_post_falls_back_below_unpublished_day() {
    assert_eq!(seeded().today_post(7).unwrap().unwrap().day, 6);
}

#[test]
fn today_post_above_all_days() {
    assert_eq!(seeded().today_post(300).unwrap().unwrap().day, 10);
}

#[test]
fn today_post_none_when_nothing_published_below() {
    let mut store = MemoryStore::new();
    store
        .insert(NewPost::new(3, ymd(2026, 2, 1), "late", "x.jpg"))
        .unwrap();
    assert!(store.today_post(2).unwrap().is_none());
}
