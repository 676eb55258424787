//! mediashelf - Shared-login media tracker
//!
//! Users log in with one shared password, catalog movies and books
//! (metadata only, linking to externally hosted files), and log what they
//! watched or downloaded to a common activity feed.
//!
//! # Architecture
//!
//! - Every catalog mutation appends a matching activity entry in the same call
//! - Items and entries are never updated or deleted
//! - All state is in memory and lost on restart
//!
//! # Modules
//!
//! - `domain`: Data structures (MediaItem, ActivityEntry, ShelfError)
//! - `library`: In-memory collections (Catalog, ActivityLog, Identities)
//! - `core`: The MediaShelf service tying them together
//! - `server`: HTTP JSON API
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Serve the API with the sample items
//! mediashelf serve
//!
//! # Serve an empty shelf on another port
//! MEDIASHELF_PASSWORD=hunter2 mediashelf serve --bind 0.0.0.0:8080 --no-seed
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod library;
pub mod server;

// Re-export main types at crate root for convenience
pub use crate::core::MediaShelf;
pub use domain::{
    AccessKind, ActivityAction, ActivityEntry, Creator, CreatorRole, MediaId, MediaItem,
    MediaKind, NewMedia, ShelfError,
};
pub use library::{ActivityLog, Catalog, Identities, DEFAULT_FEED_LIMIT, MAX_FEED_LIMIT};
