//! Error types for the suhba-store crate.

use std::path::PathBuf;

use crate::post::PostId;

/// Error type for all fallible operations in the suhba-store crate.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Returned when the backing file cannot be read or written.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path of the file being accessed.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when stored data cannot be encoded or decoded.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a post document on disk cannot be loaded.
    #[error("corrupt post file {}: {reason}", path.display())]
    Corrupt {
        /// Path of the rejected file.
        path: PathBuf,
        /// Why the document was rejected.
        reason: String,
    },

    /// Returned when a loaded collection holds two posts with the same id.
    #[error("duplicate post id {id}")]
    DuplicateId {
        /// The repeated id.
        id: PostId,
    },

    /// Returned when a new post is missing a required field.
    #[error("invalid post: {field} must not be empty")]
    MissingField {
        /// Name of the empty field.
        field: &'static str,
    },

    /// Returned when the store cannot serve a request for reasons of its own.
    #[error("store unavailable: {reason}")]
    Unavailable {
        /// Description of the failure.
        reason: String,
    },
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization {
            reason: e.to_string(),
        }
    }
}
