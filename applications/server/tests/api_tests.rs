/// API integration tests
///
/// Complete HTTP request/response cycles against a real SQLite database.
use attic_core::{Artist, Catalog, Station, StationType, Track};
use attic_server::config::{ServerConfig, ServerSettings, StorageSettings};
use attic_server::{create_router, AppState};
use attic_storage::Database;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

async fn create_test_app() -> (Router, Arc<Database>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
    let db = Arc::new(Database::new(&db_url).await.unwrap());

    let config = Arc::new(ServerConfig {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        storage: StorageSettings {
            database_url: db_url,
        },
        music: attic_core::MusicSettings::default(),
    });

    let app = create_router(AppState::new(Arc::clone(&db), config));
    (app, db, temp_dir)
}

async fn seed_track(db: &Database) -> i64 {
    db.add_artist(&Artist {
        id: 0,
        name: "Pixel".to_string(),
        sort_name: "Pixel".to_string(),
        mbid: String::new(),
    })
    .await
    .unwrap();
    db.add_track(&Track {
        id: 0,
        artist: "Pixel".to_string(),
        release: "Glow".to_string(),
        title: "Aurora".to_string(),
        track_num: 1,
        disc_num: 1,
        etag: "etag-aurora".to_string(),
        size: 4096,
        release_date: None,
    })
    .await
    .unwrap()
}

fn get(uri: &str, user: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-user", user)
        .body(Body::empty())
        .unwrap()
}

fn patch(uri: &str, user: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("PATCH")
        .header("x-user", user)
        .header(header::CONTENT_TYPE, "application/json-patch+json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_check() {
    let (app, _db, _tmp) = create_test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn missing_user_header_is_unauthorized() {
    let (app, _db, _tmp) = create_test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/api/playlist").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn get_playlist_creates_empty_document() {
    let (app, _db, _tmp) = create_test_app().await;

    let response = app.oneshot(get("/api/playlist", "alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["playlist"]["location"], "/api/playlist");
    assert_eq!(body["playlist"]["creator"], "alice");
    assert_eq!(body["playlist"]["track"], serde_json::json!([]));
    assert_eq!(body["index"], -1);
}

#[tokio::test]
async fn patch_resolves_new_references() {
    let (app, db, _tmp) = create_test_app().await;
    let track_id = seed_track(&db).await;

    // prime the saved playlist
    app.clone()
        .oneshot(get("/api/playlist", "alice"))
        .await
        .unwrap();

    let ops = format!(
        r#"[{{"op":"add","path":"/playlist/track/-","value":{{"$ref":"/music/tracks/{track_id}"}}}}]"#
    );
    let response = app
        .clone()
        .oneshot(patch("/api/playlist", "alice", &ops))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let track = &body["playlist"]["track"][0];
    assert_eq!(track["creator"], "Pixel");
    assert_eq!(track["title"], "Aurora");
    assert_eq!(
        track["location"][0],
        format!("/api/tracks/{track_id}/location")
    );

    // a cursor-only edit leaves the track list unchanged
    let response = app
        .oneshot(patch(
            "/api/playlist",
            "alice",
            r#"[{"op":"replace","path":"/index","value":0}]"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn malformed_patch_is_bad_request() {
    let (app, _db, _tmp) = create_test_app().await;

    app.clone()
        .oneshot(get("/api/playlist", "alice"))
        .await
        .unwrap();

    let response = app
        .oneshot(patch("/api/playlist", "alice", "not a patch"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

fn station(owner: &str, shared: bool) -> Station {
    Station {
        id: 0,
        user: owner.to_string(),
        name: "Pixel Tracks".to_string(),
        reference: "/music/artists/1/tracks".to_string(),
        shared,
        kind: StationType::Artist,
        creator: String::new(),
        image: String::new(),
        playlist: Vec::new(),
    }
}

#[tokio::test]
async fn station_refresh_on_read() {
    let (app, db, _tmp) = create_test_app().await;
    seed_track(&db).await;
    let s = db.create_station(&station("alice", false)).await.unwrap();

    let uri = format!("/api/radio/stations/{}", s.id);
    let response = app.oneshot(get(&uri, "alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["playlist"]["title"], "Pixel Tracks");
    assert_eq!(body["playlist"]["creator"], "Radio");
    assert_eq!(body["playlist"]["track"][0]["title"], "Aurora");

    // the refreshed document was persisted
    let stored = db.station(s.id).await.unwrap();
    assert!(!stored.playlist.is_empty());
}

#[tokio::test]
async fn invisible_station_is_not_found() {
    let (app, db, _tmp) = create_test_app().await;
    seed_track(&db).await;
    let s = db.create_station(&station("alice", false)).await.unwrap();

    let uri = format!("/api/radio/stations/{}", s.id);
    let response = app.clone().oneshot(get(&uri, "bob")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(get("/api/radio/stations/999", "alice"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn station_listing_is_scoped() {
    let (app, db, _tmp) = create_test_app().await;
    db.create_station(&station("alice", false)).await.unwrap();

    let response = app.clone().oneshot(get("/api/radio", "alice")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let response = app.oneshot(get("/api/radio", "bob")).await.unwrap();
    let body = body_json(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn only_the_owner_deletes_a_station() {
    let (app, db, _tmp) = create_test_app().await;
    let s = db.create_station(&station("alice", true)).await.unwrap();
    let uri = format!("/api/radio/stations/{}", s.id);

    let forbidden = Request::builder()
        .uri(&uri)
        .method("DELETE")
        .header("x-user", "bob")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(forbidden).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let allowed = Request::builder()
        .uri(&uri)
        .method("DELETE")
        .header("x-user", "alice")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(allowed).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get(&uri, "alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
