//! Activity entries for the append-only activity log.
//!
//! Each entry snapshots the title of the item it refers to, so the feed can
//! be rendered without joining back to the catalog.
//!
//! On the wire, keys are camelCase and `ts` is milliseconds since the epoch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{optional_text, require_text, ShelfError};
use super::media::MediaId;

/// A single record in the activity log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    /// Unique identifier for this entry
    pub id: Uuid,

    /// Identity of the actor
    pub user: String,

    /// What the actor did
    pub action: ActivityAction,

    /// Item the action refers to (lookup only, never owned)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_id: Option<MediaId>,

    /// Title of the item when the action happened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// When the action happened
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub ts: DateTime<Utc>,
}

impl ActivityEntry {
    /// Create a new entry with the current timestamp
    pub fn new(
        user: &str,
        action: ActivityAction,
        media_id: Option<MediaId>,
        title: Option<String>,
    ) -> Result<Self, ShelfError> {
        Ok(Self {
            id: Uuid::new_v4(),
            user: require_text("user", user)?,
            action,
            media_id,
            title: optional_text(title),
            ts: Utc::now(),
        })
    }

    /// Override the timestamp
    pub fn with_ts(mut self, ts: DateTime<Utc>) -> Self {
        self.ts = ts;
        self
    }
}

/// Types of actions recorded in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    /// An item was added to the catalog
    Upload,

    /// An item was watched
    Watch,

    /// An item's file was downloaded
    Download,
}

impl std::fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityAction::Upload => write!(f, "upload"),
            ActivityAction::Watch => write!(f, "watch"),
            ActivityAction::Download => write!(f, "download"),
        }
    }
}

impl std::str::FromStr for ActivityAction {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upload" => Ok(ActivityAction::Upload),
            "watch" => Ok(ActivityAction::Watch),
            "download" => Ok(ActivityAction::Download),
            _ => Err(ShelfError::validation(
                "action",
                "must be upload, watch or download",
            )),
        }
    }
}

/// Ways an existing item can be accessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessKind {
    Watch,
    Download,
}

impl From<AccessKind> for ActivityAction {
    fn from(kind: AccessKind) -> Self {
        match kind {
            AccessKind::Watch => ActivityAction::Watch,
            AccessKind::Download => ActivityAction::Download,
        }
    }
}

impl std::str::FromStr for AccessKind {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<ActivityAction>() {
            Ok(ActivityAction::Watch) => Ok(AccessKind::Watch),
            Ok(ActivityAction::Download) => Ok(AccessKind::Download),
            _ => Err(ShelfError::validation("action", "must be watch or download")),
        }
    }
}
