//! Use-case tests for the catalogue service
//!
//! Exercises the catalogue directly, below the HTTP layer.

mod helpers;

use songbook_common::db::{SongFilter, SongPatch};
use songbook_server::services::{Catalogue, CatalogueError};

use helpers::*;

#[tokio::test]
async fn test_create_then_page_lyrics() {
    let pool = setup_db().await;
    let lookup_url = spawn_lookup(sample_detail()).await;
    let catalogue = Catalogue::new(pool, detail_client(&lookup_url));

    let created = catalogue.create_song("Muse", "Supermassive Black Hole").await.unwrap();
    assert_eq!(created.release_date, "16.07.2006");

    let page = catalogue
        .song_text_page("Muse", "Supermassive Black Hole", Some(1), Some(1))
        .await
        .unwrap();
    assert_eq!(page, vec![vec!["Verse two line a".to_string()]]);
}

#[tokio::test]
async fn test_create_fails_when_lookup_fails() {
    let pool = setup_db().await;
    let lookup_url = spawn_failing_lookup().await;
    let catalogue = Catalogue::new(pool.clone(), detail_client(&lookup_url));

    let err = catalogue.create_song("Muse", "Uprising").await.unwrap_err();

    assert!(matches!(err, CatalogueError::Detail(_)));
    assert_eq!(song_count(&pool).await, 0);
}

#[tokio::test]
async fn test_update_without_fields_reports_no_fields() {
    let pool = setup_db().await;
    let lookup_url = spawn_lookup(sample_detail()).await;
    let catalogue = Catalogue::new(pool, detail_client(&lookup_url));
    let created = catalogue.create_song("Muse", "Uprising").await.unwrap();

    let err = catalogue
        .update_song(created.id, &SongPatch::default())
        .await
        .unwrap_err();

    assert!(err.is_no_fields_to_update());
    assert_eq!(err.to_string(), "updating song: no fields to update");

    let songs = catalogue.list_songs(&SongFilter::default()).await.unwrap();
    assert_eq!(songs, vec![created]);
}

#[tokio::test]
async fn test_missing_song_text_is_storage_error() {
    let pool = setup_db().await;
    let lookup_url = spawn_lookup(sample_detail()).await;
    let catalogue = Catalogue::new(pool, detail_client(&lookup_url));

    let err = catalogue
        .song_text_page("Nobody", "Nothing", None, None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CatalogueError::Storage { context: "getting song text", .. }
    ));
    assert!(!err.is_no_fields_to_update());
}

#[tokio::test]
async fn test_delete_then_list_is_empty() {
    let pool = setup_db().await;
    let lookup_url = spawn_lookup(sample_detail()).await;
    let catalogue = Catalogue::new(pool, detail_client(&lookup_url));
    let created = catalogue.create_song("Muse", "Uprising").await.unwrap();

    catalogue.delete_song(created.id).await.unwrap();
    // Second delete of the same id still succeeds
    catalogue.delete_song(created.id).await.unwrap();

    assert!(catalogue.list_songs(&SongFilter::default()).await.unwrap().is_empty());
}
