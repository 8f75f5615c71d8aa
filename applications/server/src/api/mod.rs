/// API route handlers
use crate::error::ServerError;
use attic_core::{Error as CoreError, User};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

pub mod health;
pub mod playlist;
pub mod stations;

/// The caller's identity, read from the `x-user` header.
///
/// Session issuance and verification live in the reverse proxy in front of
/// this service; by the time a request arrives the header is trusted.
pub struct CurrentUser(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let name = parts
            .headers
            .get("x-user")
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ServerError::Unauthorized("missing x-user header".to_string()))?;
        Ok(CurrentUser(User::new(name)))
    }
}

/// Map direct lookup misses to 404; everything else stays a resolver error.
pub(crate) fn lookup_err(err: CoreError) -> ServerError {
    if err.is_not_found() {
        ServerError::NotFound(err.to_string())
    } else {
        ServerError::Core(err)
    }
}
