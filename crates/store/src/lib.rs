//! # suhba-store
//!
//! Storage for countdown status posts. The [`PostStore`] trait is the only
//! thing the rest of the workspace depends on; [`MemoryStore`] and
//! [`JsonFileStore`] are the two backends.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `post` | `StatusPost`, `NewPost`, `PostUpdate`, `PostId` |
//! | `store` | `PostStore` trait and the shared collection |
//! | `memory` | In-memory backend |
//! | `json_file` | JSON document backend |
//! | `error` | Error types |

mod error;
mod json_file;
mod memory;
mod post;
mod store;

pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use post::{NewPost, PostId, PostUpdate, StatusPost};
pub use store::PostStore;
