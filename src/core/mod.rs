//! Core service logic.
//!
//! This module contains:
//! - MediaShelf: the catalog, activity log and identity set behind one API

pub mod shelf;

// Re-export commonly used types
pub use shelf::{MediaShelf, SEED_USER};
