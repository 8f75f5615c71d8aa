/// Saved playlist API routes
///
/// The editing flow is GET, client-side diff, PATCH: the patch is applied
/// to the serialized form the client last saw, the patched document is
/// re-resolved, persisted, and compared against the previous bytes. An
/// unchanged document answers 204 so clients skip re-fetching.
use crate::api::CurrentUser;
use crate::error::Result;
use crate::locator::ApiLocator;
use crate::state::AppState;
use attic_radio::Resolver;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub(crate) fn json_document(data: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], data).into_response()
}

/// GET /api/playlist - the caller's saved playlist, created empty on first
/// read
pub async fn get_playlist(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Response> {
    let data = state.db.user_playlist(&user).await?;
    Ok(json_document(data))
}

/// PATCH /api/playlist - apply a JSON-Patch to the saved playlist
pub async fn patch_playlist(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Bytes,
) -> Result<Response> {
    let before = state.db.user_playlist(&user).await?;
    let patched = attic_spiff::patch(&before, &body)?;

    let mut plist = attic_spiff::unmarshal(&patched)?;
    let mut resolver = Resolver::new(
        state.db.as_ref(),
        &ApiLocator,
        &state.config.music,
        StdRng::from_entropy(),
    );
    resolver.resolve(&user, &mut plist).await?;

    let after = plist.marshal()?;
    state.db.update_user_playlist(&user, &after).await?;

    if attic_spiff::compare(&before, &after)? {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(json_document(after))
}
