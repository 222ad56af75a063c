//! Volatile post store.

use chrono::Utc;

use crate::error::StoreError;
use crate::post::{NewPost, PostId, PostUpdate, StatusPost};
use crate::store::{PostStore, Posts};

/// A post store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    posts: Posts,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Returns `true` if no posts are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PostStore for MemoryStore {
    fn all(&self) -> Result<Vec<StatusPost>, StoreError> {
        Ok(self.posts.sorted())
    }

    fn get(&self, id: PostId) -> Result<Option<StatusPost>, StoreError> {
        Ok(self.posts.get(id).cloned())
    }

    fn insert(&mut self, post: NewPost) -> Result<StatusPost, StoreError> {
        self.posts.insert(post, Utc::now())
    }

    fn update(&mut self, id: PostId, update: &PostUpdate) -> Result<bool, StoreError> {
        Ok(self.posts.update(id, update, Utc::now()))
    }

    fn delete(&mut self, id: PostId) -> Result<bool, StoreError> {
        Ok(self.posts.delete(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_post(day: u32) -> NewPost {
        let date = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        NewPost::new(day, date, format!("day {day}"), "hd.jpg")
    }

    #[test]
    fn insert_get_delete() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        let post = store.insert(new_post(300)).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(post.id).unwrap(), Some(post.clone()));
        assert!(store.delete(post.id).unwrap());
        assert_eq!(store.get(post.id).unwrap(), None);
    }

    #[test]
    fn update_missing_post() {
        let mut store = MemoryStore::new();
        assert!(!store.update(PostId::new(42), &PostUpdate::day(1)).unwrap());
    }

    #[test]
    fn set_day_retags() {
        let mut store = MemoryStore::new();
        let post = store.insert(new_post(12)).unwrap();
        assert!(store.set_day(post.id, 300).unwrap());
        let stored = store.get(post.id).unwrap().unwrap();
        assert_eq!(stored.day, 300);
        assert!(stored.updated_at.is_some());
    }
}
