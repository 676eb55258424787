//! Shelf Integration Tests
//!
//! Tests for create-and-log, listing order, access logging and the feed.

use std::collections::HashSet;

use mediashelf::{
    AccessKind, ActivityAction, MediaId, MediaKind, MediaShelf, NewMedia, ShelfError,
    MAX_FEED_LIMIT,
};

fn shelf() -> MediaShelf {
    MediaShelf::new("letmein")
}

fn nemo() -> NewMedia {
    NewMedia::new(MediaKind::Movie, "Finding Nemo")
        .with_year(2003)
        .with_creator("Andrew Stanton")
}

#[test]
fn test_create_movie_logs_upload() {
    let mut shelf = shelf();

    let item = shelf.create_media(nemo(), "admin").unwrap();
    assert_eq!(item.kind, MediaKind::Movie);
    assert_eq!(item.title, "Finding Nemo");
    assert_eq!(item.year, Some(2003));

    let feed = shelf.recent_activity(None);
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].user, "admin");
    assert_eq!(feed[0].action, ActivityAction::Upload);
    assert_eq!(feed[0].title.as_deref(), Some("Finding Nemo"));
    assert_eq!(feed[0].media_id, Some(item.id));
}

#[test]
fn test_created_ids_are_unique() {
    let mut shelf = shelf();
    let mut seen = HashSet::new();

    for i in 0..100 {
        let item = shelf
            .create_media(NewMedia::new(MediaKind::Book, format!("Book {}", i)), "admin")
            .unwrap();
        assert!(seen.insert(item.id), "duplicate id {}", item.id);
    }
}

#[test]
fn test_blank_title_records_nothing() {
    let mut shelf = shelf();

    for title in ["", "   ", "\t\n"] {
        let err = shelf
            .create_media(NewMedia::new(MediaKind::Movie, title), "admin")
            .unwrap_err();
        assert!(matches!(err, ShelfError::Validation { field: "title", .. }));
    }

    assert_eq!(shelf.media_len(), 0);
    assert_eq!(shelf.activity_len(), 0);
}

#[test]
fn test_each_create_adds_one_upload_with_trimmed_title() {
    let mut shelf = shelf();

    for (i, title) in ["  Dune ", "Heat", " Alien"].iter().enumerate() {
        let item = shelf
            .create_media(NewMedia::new(MediaKind::Movie, *title), "admin")
            .unwrap();

        assert_eq!(shelf.activity_len(), i + 1);
        let latest = shelf.recent_activity(Some(1))[0];
        assert_eq!(latest.action, ActivityAction::Upload);
        assert_eq!(latest.media_id, Some(item.id));
        assert_eq!(latest.title.as_deref(), Some(title.trim()));
    }
}

#[test]
fn test_list_sorted_and_filter_is_subsequence() {
    let mut shelf = shelf();
    shelf.seed_samples().unwrap();
    for i in 0..4 {
        let kind = if i % 2 == 0 { MediaKind::Movie } else { MediaKind::Book };
        shelf
            .create_media(NewMedia::new(kind, format!("Item {}", i)), "admin")
            .unwrap();
    }

    let all = shelf.list_media(None);
    assert_eq!(all.len(), 6);
    assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));

    let movies = shelf.list_media(Some(MediaKind::Movie));
    assert!(movies.iter().all(|m| m.kind == MediaKind::Movie));

    let expected: Vec<MediaId> = all
        .iter()
        .filter(|m| m.kind == MediaKind::Movie)
        .map(|m| m.id)
        .collect();
    let actual: Vec<MediaId> = movies.iter().map(|m| m.id).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_get_unknown_id() {
    let shelf = shelf();
    assert!(matches!(
        shelf.get_media(&MediaId::new()),
        Err(ShelfError::NotFound(_))
    ));
}

#[test]
fn test_record_access_unknown_id_leaves_log_unchanged() {
    let mut shelf = shelf();
    shelf.create_media(nemo(), "admin").unwrap();
    let before = shelf.activity_len();

    let err = shelf
        .record_access(&MediaId::new(), AccessKind::Watch, "alice")
        .unwrap_err();

    assert!(matches!(err, ShelfError::NotFound(_)));
    assert_eq!(shelf.activity_len(), before);
}

#[test]
fn test_watch_nemo_scenario() {
    let mut shelf = shelf();
    let nemo = shelf.create_media(nemo(), "admin").unwrap();
    let movies_before: Vec<_> = shelf
        .list_media(Some(MediaKind::Movie))
        .into_iter()
        .cloned()
        .collect();

    shelf.record_access(&nemo.id, AccessKind::Watch, "alice").unwrap();

    let latest = shelf.recent_activity(Some(1))[0];
    assert_eq!(latest.action, ActivityAction::Watch);
    assert_eq!(latest.media_id, Some(nemo.id));
    assert_eq!(latest.user, "alice");

    let movies_after: Vec<_> = shelf
        .list_media(Some(MediaKind::Movie))
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(movies_before, movies_after);
}

#[test]
fn test_recent_returns_most_recent_first() {
    let mut shelf = shelf();
    for title in ["One", "Two", "Three"] {
        shelf
            .create_media(NewMedia::new(MediaKind::Book, title), "admin")
            .unwrap();
    }

    let feed = shelf.recent_activity(Some(2));
    let titles: Vec<_> = feed.iter().map(|e| e.title.as_deref().unwrap()).collect();
    assert_eq!(titles, vec!["Three", "Two"]);
}

#[test]
fn test_recent_never_exceeds_cap() {
    let mut shelf = shelf();
    let item = shelf.create_media(nemo(), "admin").unwrap();
    for _ in 0..(MAX_FEED_LIMIT + 20) {
        shelf.record_access(&item.id, AccessKind::Download, "bob").unwrap();
    }

    for limit in [0, 1, 50, 200, 500] {
        let feed = shelf.recent_activity(Some(limit));
        assert_eq!(feed.len(), limit.min(MAX_FEED_LIMIT));
        assert!(feed.windows(2).all(|w| w[0].ts >= w[1].ts));
    }
}

#[test]
fn test_users_from_login_and_upload() {
    let mut shelf = shelf();
    shelf.login("zoe", "letmein").unwrap();
    shelf.create_media(nemo(), "admin").unwrap();
    shelf.login("zoe", "letmein").unwrap();

    assert_eq!(shelf.users(), vec!["admin", "zoe"]);
}

#[test]
fn test_every_item_has_exactly_one_upload_entry() {
    let mut shelf = shelf();
    shelf.seed_samples().unwrap();
    let heat = shelf
        .create_media(NewMedia::new(MediaKind::Movie, "Heat"), "alice")
        .unwrap();
    shelf.record_access(&heat.id, AccessKind::Watch, "bob").unwrap();
    let _ = shelf.create_media(NewMedia::new(MediaKind::Book, " "), "alice");

    let feed = shelf.recent_activity(Some(MAX_FEED_LIMIT));
    for item in shelf.list_media(None) {
        let uploads = feed
            .iter()
            .filter(|e| e.action == ActivityAction::Upload && e.media_id == Some(item.id))
            .count();
        assert_eq!(uploads, 1, "item {} has {} upload entries", item.title, uploads);
    }
    assert_eq!(shelf.media_len(), 3);
    assert_eq!(shelf.activity_len(), 4);
}
