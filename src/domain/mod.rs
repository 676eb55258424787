//! Domain types for the media shelf.
//!
//! This module contains the core data structures:
//! - Media: catalog items (movies and books)
//! - Activity: immutable records of user actions
//! - Error: the error taxonomy shared by every component

pub mod activity;
pub mod error;
pub mod media;

// Re-export commonly used types
pub use activity::{AccessKind, ActivityAction, ActivityEntry};
pub use error::ShelfError;
pub use media::{Creator, CreatorRole, MediaId, MediaItem, MediaKind, NewMedia};
