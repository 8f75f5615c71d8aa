//! Attic Server
//!
//! Thin HTTP layer over the playlist resolver and station engine. Exposes
//! the saved playlist (GET/PATCH with 204 change detection), station
//! listing and refresh-on-read, and a health endpoint. Callers are
//! identified by the `x-user` header; session handling lives upstream.

pub mod api;
pub mod config;
pub mod error;
pub mod locator;
pub mod state;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use locator::ApiLocator;
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(api::health::health))
        .route(
            "/api/playlist",
            get(api::playlist::get_playlist).patch(api::playlist::patch_playlist),
        )
        .route("/api/radio", get(api::stations::list_stations))
        .route(
            "/api/radio/stations/:id",
            get(api::stations::get_station)
                .patch(api::stations::patch_station)
                .delete(api::stations::delete_station),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
