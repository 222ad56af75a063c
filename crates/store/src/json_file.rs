//! Post store persisted as a JSON document.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::post::{NewPost, PostId, PostUpdate, StatusPost};
use crate::store::{PostStore, Posts};

/// A post store backed by a single JSON file.
///
/// The whole collection is loaded on [`open`](Self::open) and written back
/// after every successful mutation. Writes go to a sibling temporary file that
/// is then renamed over the target, so readers never observe a partial file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    posts: Posts,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file opens as an empty store and
    /// is created on the first write.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read and
    /// [`StoreError::Corrupt`] if it is not a valid post document, including
    /// one where two posts share an id.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let posts = match fs::read_to_string(&path) {
            Ok(text) => load(&text).map_err(|e| StoreError::Corrupt {
                path: path.clone(),
                reason: e.to_string(),
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "post file not found, starting empty");
                Posts::default()
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path,
                    reason: e.to_string(),
                });
            }
        };
        debug!(path = %path.display(), "opened post store");
        Ok(Self { path, posts })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.posts)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| StoreError::Io {
            path: tmp.clone(),
            reason: e.to_string(),
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Runs `mutate` on a copy of the collection and keeps the result only if
    /// it was persisted.
    fn commit<T>(
        &mut self,
        mutate: impl FnOnce(&mut Posts) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut next = self.posts.clone();
        let out = mutate(&mut next)?;
        let previous = std::mem::replace(&mut self.posts, next);
        if let Err(e) = self.persist() {
            self.posts = previous;
            return Err(e);
        }
        Ok(out)
    }
}

fn load(text: &str) -> Result<Posts, StoreError> {
    serde_json::from_str::<Posts>(text)?.reindex()
}

impl PostStore for JsonFileStore {
    fn all(&self) -> Result<Vec<StatusPost>, StoreError> {
        Ok(self.posts.sorted())
    }

    fn get(&self, id: PostId) -> Result<Option<StatusPost>, StoreError> {
        Ok(self.posts.get(id).cloned())
    }

    fn insert(&mut self, post: NewPost) -> Result<StatusPost, StoreError> {
        self.commit(|posts| posts.insert(post, Utc::now()))
    }

    fn update(&mut self, id: PostId, update: &PostUpdate) -> Result<bool, StoreError> {
        if self.posts.get(id).is_none() {
            return Ok(false);
        }
        self.commit(|posts| Ok(posts.update(id, update, Utc::now())))
    }

    fn delete(&mut self, id: PostId) -> Result<bool, StoreError> {
        if self.posts.get(id).is_none() {
            return Ok(false);
        }
        self.commit(|posts| Ok(posts.delete(id)))
    }
}
