//! Integration tests for the catalog queries backing the selection modes.


use attic_core::{Catalog, Error};
use test_helpers::*;

async fn seed_artist(db: &attic_storage::Database) {
    db.add_artist(&artist("Pixel")).await.unwrap();
    db.add_release(&release("Pixel", "Glow", "Album", "2001-05-01"))
        .await
        .unwrap();
    db.add_release(&release("Pixel", "Shine", "Single", "2002-03-01"))
        .await
        .unwrap();
    db.add_release(&release("Pixel", "Aurora", "Single", "2001-01-01"))
        .await
        .unwrap();
    db.add_track(&track("Pixel", "Glow", "Aurora", 1)).await.unwrap();
    db.add_track(&track("Pixel", "Glow", "Shine", 2)).await.unwrap();
    db.add_track(&track("Pixel", "Glow", "Drift", 3)).await.unwrap();
    db.add_popular("Pixel", "Drift", 1).await.unwrap();
    db.add_popular("Pixel", "Shine", 2).await.unwrap();
}

#[tokio::test]
async fn artist_lookup_and_not_found() {
    let test_db = TestDb::new().await;
    let db = &test_db.db;

    let id = db.add_artist(&artist("Pixel")).await.unwrap();
    let found = db.artist(id).await.unwrap();
    assert_eq!(found.name, "Pixel");
    assert_eq!(found.id, id);

    let err = db.artist(id + 100).await.unwrap_err();
    assert!(matches!(err, Error::ArtistNotFound(_)));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn artist_tracks_ordered_by_release() {
    let test_db = TestDb::new().await;
    let db = &test_db.db;

    db.add_track(&track("Pixel", "Zenith", "Late", 1)).await.unwrap();
    db.add_track(&track("Pixel", "Glow", "Second", 2)).await.unwrap();
    db.add_track(&track("Pixel", "Glow", "First", 1)).await.unwrap();

    let tracks = db.artist_tracks("Pixel").await.unwrap();
    let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Late"]);
}

#[tokio::test]
async fn singles_join_on_release_type_and_title() {
    let test_db = TestDb::new().await;
    let db = &test_db.db;
    seed_artist(db).await;

    let singles = db.artist_singles("Pixel", 50).await.unwrap();
    let titles: Vec<&str> = singles.iter().map(|t| t.title.as_str()).collect();
    // ordered by the single's earliest release date
    assert_eq!(titles, vec!["Aurora", "Shine"]);
}

#[tokio::test]
async fn popular_ordered_by_rank_with_limit() {
    let test_db = TestDb::new().await;
    let db = &test_db.db;
    seed_artist(db).await;

    let popular = db.artist_popular("Pixel", 50).await.unwrap();
    let titles: Vec<&str> = popular.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Drift", "Shine"]);

    let capped = db.artist_popular("Pixel", 1).await.unwrap();
    assert_eq!(capped.len(), 1);
    assert_eq!(capped[0].title, "Drift");
}

#[tokio::test]
async fn similar_artists_ordered_by_rank() {
    let test_db = TestDb::new().await;
    let db = &test_db.db;

    db.add_artist(&artist("Pixel")).await.unwrap();
    db.add_artist(&artist("Vertex")).await.unwrap();
    db.add_artist(&artist("Raster")).await.unwrap();
    db.add_similar("Pixel", "Raster", 2).await.unwrap();
    db.add_similar("Pixel", "Vertex", 1).await.unwrap();

    let similar = db.similar_artists("Pixel", 10).await.unwrap();
    let names: Vec<&str> = similar.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Vertex", "Raster"]);

    let capped = db.similar_artists("Pixel", 1).await.unwrap();
    assert_eq!(capped.len(), 1);
}

#[tokio::test]
async fn release_tracks_in_disc_and_track_order() {
    let test_db = TestDb::new().await;
    let db = &test_db.db;

    let id = db
        .add_release(&release("Pixel", "Glow", "Album", "2001-05-01"))
        .await
        .unwrap();
    let mut second_disc = track("Pixel", "Glow", "Closer", 1);
    second_disc.disc_num = 2;
    db.add_track(&second_disc).await.unwrap();
    db.add_track(&track("Pixel", "Glow", "Opener", 1)).await.unwrap();
    db.add_track(&track("Pixel", "Glow", "Middle", 2)).await.unwrap();

    let rel = db.release(id).await.unwrap();
    let tracks = db.release_tracks(&rel).await.unwrap();
    let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Opener", "Middle", "Closer"]);
}

#[tokio::test]
async fn search_matches_artist_release_and_title() {
    let test_db = TestDb::new().await;
    let db = &test_db.db;
    seed_artist(db).await;

    let by_artist = db.search("Pixel", 100).await.unwrap();
    assert_eq!(by_artist.len(), 3);

    let by_title = db.search("Drift", 100).await.unwrap();
    assert_eq!(by_title.len(), 1);

    let capped = db.search("Pixel", 2).await.unwrap();
    assert_eq!(capped.len(), 2);

    let none = db.search("zzzz", 100).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn series_episodes_newest_first() {
    let test_db = TestDb::new().await;
    let db = &test_db.db;

    let sid = db.add_series(&series("Signals", "Host")).await.unwrap();
    db.add_episode(&episode(sid, "Old", "2023-01-01")).await.unwrap();
    db.add_episode(&episode(sid, "New", "2024-01-01")).await.unwrap();

    let s = db.series(sid).await.unwrap();
    let episodes = db.series_episodes(&s).await.unwrap();
    let titles: Vec<&str> = episodes.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["New", "Old"]);
}

#[tokio::test]
async fn movie_round_trip() {
    let test_db = TestDb::new().await;
    let db = &test_db.db;

    let id = db.add_movie(&movie("Orbit")).await.unwrap();
    let found = db.movie(id).await.unwrap();
    assert_eq!(found.title, "Orbit");
    assert_eq!(found.date, date("2020-06-01"));

    assert!(matches!(
        db.movie(id + 1).await.unwrap_err(),
        Error::MovieNotFound(_)
    ));
}
