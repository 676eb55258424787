//! Catalog of all media items.
//!
//! Items are kept in insertion order and only ever appended. Listing sorts a
//! borrowed view by creation time, most recent first.
//!
//! Items enter the catalog only through `MediaShelf`, which logs the upload
//! in the same call.

use crate::domain::{MediaId, MediaItem, MediaKind, ShelfError};

/// Catalog of movies and books
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All cataloged items, oldest insertion first
    items: Vec<MediaItem>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an already-validated item
    pub(crate) fn insert(&mut self, item: MediaItem) -> &MediaItem {
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Get an item by ID
    pub fn get(&self, id: &MediaId) -> Result<&MediaItem, ShelfError> {
        self.items
            .iter()
            .find(|i| &i.id == id)
            .ok_or_else(|| ShelfError::NotFound(id.to_string()))
    }

    /// List items, optionally filtered by kind, most recent first.
    ///
    /// Items created at the same instant are listed newest insertion first.
    pub fn list(&self, kind: Option<MediaKind>) -> Vec<&MediaItem> {
        let mut items: Vec<_> = self
            .items
            .iter()
            .rev()
            .filter(|item| kind.map_or(true, |k| item.kind == k))
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
