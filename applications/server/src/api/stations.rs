/// Radio station API routes
///
/// Stations refresh on every read: GET always recomputes and persists the
/// playlist document. A station that exists but is not visible to the
/// caller answers 404, indistinguishable from a missing one.
use crate::api::{lookup_err, CurrentUser};
use crate::api::playlist::json_document;
use crate::error::{Result, ServerError};
use crate::locator::ApiLocator;
use crate::state::AppState;
use attic_core::{Catalog, Station, User};
use attic_radio::Resolver;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

async fn visible_station(state: &AppState, user: &User, id: i64) -> Result<Station> {
    let station = state.db.station(id).await.map_err(lookup_err)?;
    if !station.visible(user) {
        return Err(ServerError::NotFound(format!("station not found: {id}")));
    }
    Ok(station)
}

/// GET /api/radio - stations visible to the caller
pub async fn list_stations(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Station>>> {
    let stations = state.db.stations(&user).await?;
    Ok(Json(stations))
}

/// GET /api/radio/stations/:id - refresh the station and return its
/// resolved playlist document
pub async fn get_station(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Response> {
    let mut station = visible_station(&state, &user, id).await?;

    let mut resolver = Resolver::new(
        state.db.as_ref(),
        &ApiLocator,
        &state.config.music,
        StdRng::from_entropy(),
    );
    resolver.refresh_station(&user, &mut station).await?;

    Ok(json_document(station.playlist))
}

/// PATCH /api/radio/stations/:id - apply a JSON-Patch to the station's
/// playlist document
pub async fn patch_station(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Response> {
    let mut station = visible_station(&state, &user, id).await?;
    if station.user != user.name {
        return Err(ServerError::Forbidden("not the station owner".to_string()));
    }

    let mut resolver = Resolver::new(
        state.db.as_ref(),
        &ApiLocator,
        &state.config.music,
        StdRng::from_entropy(),
    );

    // patch against the document the client last saw
    if station.playlist.is_empty() {
        resolver.refresh_station(&user, &mut station).await?;
    }
    let before = station.playlist.clone();
    let patched = attic_spiff::patch(&before, &body)?;

    let mut plist = attic_spiff::unmarshal(&patched)?;
    resolver.resolve(&user, &mut plist).await?;

    let after = plist.marshal()?;
    station.playlist = after.clone();
    state.db.update_station(&station).await?;

    if attic_spiff::compare(&before, &after)? {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(json_document(after))
}

/// DELETE /api/radio/stations/:id - delete an owned station
pub async fn delete_station(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Response> {
    let station = visible_station(&state, &user, id).await?;
    if station.user != user.name {
        return Err(ServerError::Forbidden("not the station owner".to_string()));
    }

    state.db.delete_station(&station).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
