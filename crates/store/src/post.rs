//! Status post model.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Identifier assigned to a post by its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    /// Wraps a raw identifier.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A published (or draft) countdown post.
///
/// `day` is whatever day number the post was tagged with. It should match the
/// countdown day of `date` but is not guaranteed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPost {
    pub id: PostId,
    pub day: u32,
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_hd_url: String,
    pub image_web_url: String,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub contributed_by: Option<String>,
    #[serde(default = "default_true")]
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Fields for a post that has not been stored yet.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use suhba_store::NewPost;
///
/// let date = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
/// let post = NewPost::new(300, date, "Day one", "https://cdn.example/300.jpg")
///     .with_description("The countdown begins")
///     .with_published(false);
/// assert!(post.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    day: u32,
    date: NaiveDate,
    title: String,
    description: String,
    image_hd_url: String,
    image_web_url: Option<String>,
    audio_url: Option<String>,
    contributed_by: Option<String>,
    is_published: bool,
}

impl NewPost {
    /// Creates a published post with the required fields.
    pub fn new(
        day: u32,
        date: NaiveDate,
        title: impl Into<String>,
        image_hd_url: impl Into<String>,
    ) -> Self {
        Self {
            day,
            date,
            title: title.into(),
            description: String::new(),
            image_hd_url: image_hd_url.into(),
            image_web_url: None,
            audio_url: None,
            contributed_by: None,
            is_published: true,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets a web-sized image; defaults to the HD image.
    pub fn with_image_web_url(mut self, url: impl Into<String>) -> Self {
        self.image_web_url = Some(url.into());
        self
    }

    /// Sets an audio attachment.
    pub fn with_audio_url(mut self, url: impl Into<String>) -> Self {
        self.audio_url = Some(url.into());
        self
    }

    /// Credits a contributor.
    pub fn with_contributor(mut self, name: impl Into<String>) -> Self {
        self.contributed_by = Some(name.into());
        self
    }

    /// Sets whether the post is visible to the public.
    pub fn with_published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    /// Checks that the required text fields are present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingField`] for an empty title or image URL.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.title.trim().is_empty() {
            return Err(StoreError::MissingField { field: "title" });
        }
        if self.image_hd_url.trim().is_empty() {
            return Err(StoreError::MissingField {
                field: "image_hd_url",
            });
        }
        Ok(())
    }

    /// Builds the stored form of this post.
    pub(crate) fn into_post(self, id: PostId, created_at: DateTime<Utc>) -> StatusPost {
        let image_web_url = self
            .image_web_url
            .unwrap_or_else(|| self.image_hd_url.clone());
        StatusPost {
            id,
            day: self.day,
            date: self.date,
            title: self.title,
            description: self.description,
            image_hd_url: self.image_hd_url,
            image_web_url,
            audio_url: self.audio_url,
            contributed_by: self.contributed_by,
            is_published: self.is_published,
            created_at,
            updated_at: None,
        }
    }
}

/// A partial update; unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostUpdate {
    pub day: Option<u32>,
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_published: Option<bool>,
}

impl PostUpdate {
    /// An update that only retags the day number.
    pub fn day(day: u32) -> Self {
        Self {
            day: Some(day),
            ..Self::default()
        }
    }

    /// Returns `true` if the update would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the set fields to `post` and stamps `updated_at`.
    pub(crate) fn apply(&self, post: &mut StatusPost, now: DateTime<Utc>) {
        if let Some(day) = self.day {
            post.day = day;
        }
        if let Some(date) = self.date {
            post.date = date;
        }
        if let Some(ref title) = self.title {
            post.title.clone_from(title);
        }
        if let Some(ref description) = self.description {
            post.description.clone_from(description);
        }
        if let Some(is_published) = self.is_published {
            post.is_published = is_published;
        }
        post.updated_at = Some(now);
    }
}
