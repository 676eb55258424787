//! In-memory collections backing the media shelf.
//!
//! - `Catalog`: the movies and books
//! - `ActivityLog`: append-only record of uploads, watches and downloads
//! - `Identities`: user strings seen so far
//!
//! Nothing here is persisted; all state lives for the process lifetime.

pub mod activity;
pub mod catalog;
pub mod identities;

pub use activity::{ActivityLog, DEFAULT_FEED_LIMIT, MAX_FEED_LIMIT};
pub use catalog::Catalog;
pub use identities::Identities;
