//! Media items: the movies and books held by the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{optional_text, require_text, ShelfError};

/// Media identifier (random UUID v4, assigned at creation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(Uuid);

impl MediaId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier supplied by a caller.
    ///
    /// Text that is not a UUID cannot name any item, so it is reported as
    /// not found rather than as a validation failure.
    pub fn parse(s: &str) -> Result<Self, ShelfError> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ShelfError::NotFound(s.to_string()))
    }
}

impl Default for MediaId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Feature film
    Movie,

    /// Book (any format)
    Book,
}

impl MediaKind {
    /// Role played by the creator of this kind of media
    pub fn creator_role(self) -> CreatorRole {
        match self {
            MediaKind::Movie => CreatorRole::Director,
            MediaKind::Book => CreatorRole::Author,
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::Book => write!(f, "book"),
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" => Ok(MediaKind::Movie),
            "book" => Ok(MediaKind::Book),
            _ => Err(ShelfError::validation("kind", "must be movie or book")),
        }
    }
}

/// Role of the person credited on an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatorRole {
    Director,
    Author,
}

impl std::fmt::Display for CreatorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreatorRole::Director => write!(f, "director"),
            CreatorRole::Author => write!(f, "author"),
        }
    }
}

/// Person credited on an item, tagged with their role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creator {
    pub role: CreatorRole,
    pub name: String,
}

/// Caller-supplied fields for a new item
#[derive(Debug, Clone)]
pub struct NewMedia {
    pub kind: MediaKind,
    pub title: String,
    pub year: Option<i32>,
    pub creator: Option<String>,
    pub external_link: Option<String>,
}

impl NewMedia {
    /// Start a new item with the required fields
    pub fn new(kind: MediaKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            year: None,
            creator: None,
            external_link: None,
        }
    }

    /// Set the release or publication year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Set the director (movies) or author (books)
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the link to the externally hosted file
    pub fn with_external_link(mut self, link: impl Into<String>) -> Self {
        self.external_link = Some(link.into());
        self
    }
}

/// A single item in the catalog. Never updated once created.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    /// Unique identifier
    pub id: MediaId,

    /// Movie or book
    pub kind: MediaKind,

    /// Trimmed, non-empty title
    pub title: String,

    pub year: Option<i32>,

    /// Director or author, depending on kind
    pub creator: Option<Creator>,

    /// Link to an externally hosted file (opaque, never fetched)
    pub external_link: Option<String>,

    /// Identity that created the item
    pub uploader: String,

    /// When the item was created
    pub created_at: DateTime<Utc>,
}

impl MediaItem {
    /// Validate `new` and build an item with a fresh id and the current time
    pub fn new(new: NewMedia, uploader: &str) -> Result<Self, ShelfError> {
        let title = require_text("title", &new.title)?;
        let uploader = require_text("uploader", uploader)?;
        let creator = optional_text(new.creator).map(|name| Creator {
            role: new.kind.creator_role(),
            name,
        });

        Ok(Self {
            id: MediaId::new(),
            kind: new.kind,
            title,
            year: new.year,
            creator,
            external_link: optional_text(new.external_link),
            uploader,
            created_at: Utc::now(),
        })
    }

    /// Override the creation time
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_from_str() {
        assert_eq!("movie".parse::<MediaKind>().unwrap(), MediaKind::Movie);
        assert_eq!(" Book ".parse::<MediaKind>().unwrap(), MediaKind::Book);

        let err = "podcast".parse::<MediaKind>().unwrap_err();
        assert_eq!(err.field(), Some("kind"));
    }

    #[test]
    fn test_creator_role_follows_kind() {
        let movie = MediaItem::new(
            NewMedia::new(MediaKind::Movie, "Alien").with_creator("Ridley Scott"),
            "admin",
        )
        .unwrap();
        let book = MediaItem::new(
            NewMedia::new(MediaKind::Book, "Dune").with_creator(" Frank Herbert "),
            "admin",
        )
        .unwrap();

        assert_eq!(movie.creator.unwrap().role, CreatorRole::Director);
        let creator = book.creator.unwrap();
        assert_eq!(creator.role, CreatorRole::Author);
        assert_eq!(creator.name, "Frank Herbert");
    }

    #[test]
    fn test_media_item_trims_fields() {
        let item = MediaItem::new(
            NewMedia::new(MediaKind::Movie, "  Finding Nemo  ")
                .with_year(2003)
                .with_creator("   ")
                .with_external_link(" https://example.com/nemo "),
            " admin ",
        )
        .unwrap();

        assert_eq!(item.title, "Finding Nemo");
        assert_eq!(item.uploader, "admin");
        assert_eq!(item.year, Some(2003));
        assert!(item.creator.is_none());
        assert_eq!(
            item.external_link.as_deref(),
            Some("https://example.com/nemo")
        );
    }

    #[test]
    fn test_media_item_rejects_blank_title() {
        let err = MediaItem::new(NewMedia::new(MediaKind::Book, "  "), "admin").unwrap_err();
        assert_eq!(err.field(), Some("title"));

        let err = MediaItem::new(NewMedia::new(MediaKind::Book, "Dune"), "").unwrap_err();
        assert_eq!(err.field(), Some("uploader"));
    }

    #[test]
    fn test_media_id_parse() {
        let id = MediaId::new();
        assert_eq!(MediaId::parse(&id.to_string()).unwrap(), id);
        assert!(matches!(
            MediaId::parse("not-a-uuid"),
            Err(ShelfError::NotFound(_))
        ));
    }
}
