//! Append-only activity log.
//!
//! Entries are never mutated or removed. The feed is a borrowed view sorted
//! by timestamp, most recent first.

use crate::domain::{ActivityAction, ActivityEntry, MediaId, ShelfError};

/// Feed size when the caller does not ask for one
pub const DEFAULT_FEED_LIMIT: usize = 50;

/// Upper bound on the feed size, whatever the caller asks for
pub const MAX_FEED_LIMIT: usize = 200;

/// In-memory activity log
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    /// Create a new empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry with a fresh id and the current time
    pub fn append(
        &mut self,
        user: &str,
        action: ActivityAction,
        media_id: Option<MediaId>,
        title: Option<String>,
    ) -> Result<&ActivityEntry, ShelfError> {
        let entry = ActivityEntry::new(user, action, media_id, title)?;
        Ok(self.push(entry))
    }

    /// Append an already-built entry
    pub(crate) fn push(&mut self, entry: ActivityEntry) -> &ActivityEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Most recent entries first, at most `limit` (default 50, capped at 200)
    pub fn recent(&self, limit: Option<usize>) -> Vec<&ActivityEntry> {
        let limit = limit.unwrap_or(DEFAULT_FEED_LIMIT).min(MAX_FEED_LIMIT);

        let mut entries: Vec<_> = self.entries.iter().rev().collect();
        entries.sort_by(|a, b| b.ts.cmp(&a.ts));
        entries.truncate(limit);
        entries
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
