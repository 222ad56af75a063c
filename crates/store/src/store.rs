//! The content store interface and the collection shared by its backends.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::post::{NewPost, PostId, PostUpdate, StatusPost};

/// Storage for status posts keyed by [`PostId`].
///
/// Listing methods order posts by day number, highest first, with ties broken
/// by id. The provided methods are defined in terms of [`all`](Self::all) and
/// [`update`](Self::update); backends with an index may override them.
pub trait PostStore {
    /// Returns every post.
    fn all(&self) -> Result<Vec<StatusPost>, StoreError>;

    /// Returns the post with `id`, if any.
    fn get(&self, id: PostId) -> Result<Option<StatusPost>, StoreError>;

    /// Stores a new post and returns it with its assigned id.
    fn insert(&mut self, post: NewPost) -> Result<StatusPost, StoreError>;

    /// Applies `update` to the post with `id`. Returns `false` if no such post exists.
    fn update(&mut self, id: PostId, update: &PostUpdate) -> Result<bool, StoreError>;

    /// Removes the post with `id`. Returns `false` if no such post exists.
    fn delete(&mut self, id: PostId) -> Result<bool, StoreError>;

    /// Retags the post with `id` with a new day number.
    fn set_day(&mut self, id: PostId, day: u32) -> Result<bool, StoreError> {
        self.update(id, &PostUpdate::day(day))
    }

    /// Returns the post tagged with `day`, the lowest id winning on duplicates.
    fn by_day(&self, day: u32) -> Result<Option<StatusPost>, StoreError> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|p| p.day == day)
            .min_by_key(|p| p.id))
    }

    /// Returns up to `limit` published posts, highest day first.
    fn recent(&self, limit: usize) -> Result<Vec<StatusPost>, StoreError> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|p| p.is_published)
            .take(limit)
            .collect())
    }

    /// Returns the published post for `day`, or failing that the published
    /// post with the highest day below it.
    fn today_post(&self, day: u32) -> Result<Option<StatusPost>, StoreError> {
        Ok(self
            .all()?
            .into_iter()
            .find(|p| p.is_published && p.day <= day))
    }
}

/// In-memory post collection with sequential ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Posts {
    next_id: u64,
    posts: Vec<StatusPost>,
    #[serde(skip)]
    index: BTreeMap<PostId, usize>,
}

impl Posts {
    /// Rebuilds the id index after deserialization.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if two posts share an id.
    pub(crate) fn reindex(mut self) -> Result<Self, StoreError> {
        self.index.clear();
        for (i, post) in self.posts.iter().enumerate() {
            if self.index.insert(post.id, i).is_some() {
                return Err(StoreError::DuplicateId { id: post.id });
            }
        }
        let max_id = self.posts.iter().map(|p| p.id.get()).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1).max(1);
        Ok(self)
    }

    pub(crate) fn len(&self) -> usize {
        self.posts.len()
    }

    pub(crate) fn sorted(&self) -> Vec<StatusPost> {
        let mut posts = self.posts.clone();
        posts.sort_by(|a, b| b.day.cmp(&a.day).then(a.id.cmp(&b.id)));
        posts
    }

    pub(crate) fn get(&self, id: PostId) -> Option<&StatusPost> {
        self.index.get(&id).map(|&i| &self.posts[i])
    }

    pub(crate) fn insert(
        &mut self,
        post: NewPost,
        now: DateTime<Utc>,
    ) -> Result<StatusPost, StoreError> {
        post.validate()?;
        let id = PostId::new(self.next_id.max(1));
        self.next_id = id.get() + 1;
        let stored = post.into_post(id, now);
        self.index.insert(id, self.posts.len());
        self.posts.push(stored.clone());
        Ok(stored)
    }

    pub(crate) fn update(&mut self, id: PostId, update: &PostUpdate, now: DateTime<Utc>) -> bool {
        match self.index.get(&id) {
            Some(&i) => {
                update.apply(&mut self.posts[i], now);
                true
            }
            None => false,
        }
    }

    pub(crate) fn delete(&mut self, id: PostId) -> bool {
        let Some(i) = self.index.remove(&id) else {
            return false;
        };
        self.posts.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        true
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
    fn ids_are_sequential_from_one() {
        let mut posts = Posts::default();
        let a = posts.insert(new_post(300), Utc::now()).unwrap();
        let b = posts.insert(new_post(299), Utc::now()).unwrap();
        assert_eq!(a.id.get(), 1);
        assert_eq!(b.id.get(), 2);
    }

    #[test]
    fn delete_keeps_index_consistent() {
        let mut posts = Posts::default();
        let a = posts.insert(new_post(3), Utc::now()).unwrap();
        let b = posts.insert(new_post(2), Utc::now()).unwrap();
        let c = posts.insert(new_post(1), Utc::now()).unwrap();
        assert!(posts.delete(a.id));
        assert!(!posts.delete(a.id));
        assert_eq!(posts.get(b.id).unwrap().day, 2);
        assert_eq!(posts.get(c.id).unwrap().day, 1);
    }

    #[test]
    fn reindex_never_reuses_ids() {
        let mut posts = Posts::default();
        posts.insert(new_post(3), Utc::now()).unwrap();
        posts.insert(new_post(2), Utc::now()).unwrap();
        let json = serde_json::to_string(&posts).unwrap();
        let mut reloaded = serde_json::from_str::<Posts>(&json).unwrap().reindex().unwrap();
        let next = reloaded.insert(new_post(1), Utc::now()).unwrap();
        assert_eq!(next.id.get(), 3);
        assert!(reloaded.get(PostId::new(1)).is_some());
    }

    #[test]
    fn reindex_rejects_shared_ids() {
        let mut posts = Posts::default();
        posts.insert(new_post(5), Utc::now()).unwrap();
        posts.insert(new_post(7), Utc::now()).unwrap();
        let json = serde_json::to_string(&posts).unwrap().replace("\"id\":2", "\"id\":1");
        let err = serde_json::from_str::<Posts>(&json).unwrap().reindex().unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { id } if id == PostId::new(1)));
    }

    #[test]
    fn sorted_by_day_descending() {
        let mut posts = Posts::default();
        posts.insert(new_post(5), Utc::now()).unwrap();
        posts.insert(new_post(9), Utc::now()).unwrap();
        posts.insert(new_post(5), Utc::now()).unwrap();
        let days: Vec<(u32, u64)> = posts.sorted().iter().map(|p| (p.day, p.id.get())).collect();
        assert_eq!(days, vec![(9, 2), (5, 1), (5, 3)]);
    }

    #[test]
    fn insert_validates() {
        let mut posts = Posts::default();
        let date = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        assert!(posts.insert(NewPost::new(1, date, "", "x"), Utc::now()).is_err());
        assert!(posts.sorted().is_empty());
    }
}
