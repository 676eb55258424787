//! The shelf service: catalog, activity log and identities behind one API.
//!
//! Every catalog mutation goes through [`MediaShelf::create_media`], which
//! stores the item and its upload record together. Both are built and
//! validated before either collection is touched, so a failed call leaves
//! no trace.

use chrono::{Duration, Utc};
use tracing::debug;

use crate::domain::{
    AccessKind, ActivityAction, ActivityEntry, MediaId, MediaItem, MediaKind, NewMedia,
    ShelfError,
};
use crate::library::{ActivityLog, Catalog, Identities};

/// Identity that owns the sample items
pub const SEED_USER: &str = "admin";

/// Media catalog with its activity feed and shared-password login
#[derive(Debug)]
pub struct MediaShelf {
    catalog: Catalog,
    activity: ActivityLog,
    identities: Identities,
    shared_password: String,
}

impl MediaShelf {
    /// Create an empty shelf guarded by `shared_password`
    pub fn new(shared_password: impl Into<String>) -> Self {
        Self {
            catalog: Catalog::new(),
            activity: ActivityLog::new(),
            identities: Identities::new(),
            shared_password: shared_password.into(),
        }
    }

    /// Add the two sample items (and their upload records) owned by `admin`
    pub fn seed_samples(&mut self) -> Result<(), ShelfError> {
        let now = Utc::now();
        let samples = [
            (
                NewMedia::new(MediaKind::Movie, "Finding Nemo")
                    .with_year(2003)
                    .with_creator("Andrew Stanton")
                    .with_external_link("https://drive.google.com/your-nemo-file"),
                Duration::hours(24),
                Duration::milliseconds(86_000_000),
            ),
            (
                NewMedia::new(MediaKind::Book, "Project Hail Mary")
                    .with_year(2021)
                    .with_creator("Andy Weir")
                    .with_external_link("https://drive.google.com/your-phm-file"),
                Duration::hours(12),
                Duration::milliseconds(43_000_000),
            ),
        ];

        for (new, item_age, entry_age) in samples {
            let item = MediaItem::new(new, SEED_USER)?.with_created_at(now - item_age);
            let entry = upload_entry(&item)?.with_ts(now - entry_age);
            self.store(item, entry);
        }

        debug!(items = self.catalog.len(), "Seeded sample media");
        Ok(())
    }

    /// Create an item and log its upload as one operation
    pub fn create_media(&mut self, new: NewMedia, uploader: &str) -> Result<MediaItem, ShelfError> {
        let item = MediaItem::new(new, uploader)?;
        let entry = upload_entry(&item)?;

        debug!(media_id = %item.id, kind = %item.kind, user = %item.uploader, "Media created");
        Ok(self.store(item, entry).clone())
    }

    /// List items, optionally of one kind, most recent first
    pub fn list_media(&self, kind: Option<MediaKind>) -> Vec<&MediaItem> {
        self.catalog.list(kind)
    }

    /// Get an item by ID
    pub fn get_media(&self, id: &MediaId) -> Result<&MediaItem, ShelfError> {
        self.catalog.get(id)
    }

    /// Log that `user` watched or downloaded an item.
    ///
    /// The item itself is left untouched; only the log records the access.
    pub fn record_access(
        &mut self,
        id: &MediaId,
        access: AccessKind,
        user: &str,
    ) -> Result<ActivityEntry, ShelfError> {
        let item = self.catalog.get(id)?;
        let entry = ActivityEntry::new(
            user,
            access.into(),
            Some(item.id),
            Some(item.title.clone()),
        )?;

        debug!(media_id = %id, action = %entry.action, user = %entry.user, "Access recorded");
        Ok(self.activity.push(entry).clone())
    }

    /// Most recent activity first (default 50, capped at 200)
    pub fn recent_activity(&self, limit: Option<usize>) -> Vec<&ActivityEntry> {
        self.activity.recent(limit)
    }

    /// Check the shared password and register the identity.
    ///
    /// Returns the trimmed username on success.
    pub fn login(&mut self, username: &str, password: &str) -> Result<String, ShelfError> {
        let user = username.trim();
        if user.is_empty() {
            return Err(ShelfError::validation("username", "must not be empty"));
        }
        if password.is_empty() {
            return Err(ShelfError::validation("password", "must not be empty"));
        }
        if password != self.shared_password {
            return Err(ShelfError::Unauthorized);
        }

        self.identities.insert(user);
        Ok(user.to_string())
    }

    /// Known identities, sorted
    pub fn users(&self) -> Vec<&str> {
        self.identities.list()
    }

    /// Number of entries in the activity log
    pub fn activity_len(&self) -> usize {
        self.activity.len()
    }

    /// Number of items in the catalog
    pub fn media_len(&self) -> usize {
        self.catalog.len()
    }

    fn store(&mut self, item: MediaItem, entry: ActivityEntry) -> &MediaItem {
        self.identities.insert(&item.uploader);
        self.activity.push(entry);
        self.catalog.insert(item)
    }
}

fn upload_entry(item: &MediaItem) -> Result<ActivityEntry, ShelfError> {
    ActivityEntry::new(
        &item.uploader,
        ActivityAction::Upload,
        Some(item.id),
        Some(item.title.clone()),
    )
}
