//! JSON shapes sent to API clients.
//!
//! Media items go out with the field names browser clients already use:
//! `type`, `driveUrl`, `createdAt` in epoch milliseconds, and the creator
//! under its role key (`director` or `author`).

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{CreatorRole, MediaId, MediaItem, MediaKind};

/// A media item as returned by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResponse {
    pub id: MediaId,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_url: Option<String>,
    pub uploader: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl From<&MediaItem> for MediaResponse {
    fn from(item: &MediaItem) -> Self {
        let (director, author) = match &item.creator {
            Some(c) if c.role == CreatorRole::Director => (Some(c.name.clone()), None),
            Some(c) => (None, Some(c.name.clone())),
            None => (None, None),
        };

        Self {
            id: item.id,
            kind: item.kind,
            title: item.title.clone(),
            year: item.year,
            director,
            author,
            drive_url: item.external_link.clone(),
            uploader: item.uploader.clone(),
            created_at: item.created_at,
        }
    }
}
