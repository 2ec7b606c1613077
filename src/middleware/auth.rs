/**
 * Authentication Gate
 *
 * The `AuthUser` extractor protects endpoints that require a valid bearer
 * token. Taking it as a handler parameter is the whole gate: extraction runs
 * before the request body is read, so an unauthenticated request is rejected
 * before any store access.
 *
 * # Contract
 *
 * 1. The Authorization header has the shape `"<scheme> <token>"`; the scheme
 *    is not inspected (wire compatibility with existing clients)
 * 2. A missing header or missing second segment is 401
 * 3. Any token verification failure is 401; the kind (expired, malformed,
 *    bad signature) is logged but never revealed to the client
 * 4. On success the verified subject id is available to the handler. The
 *    user record is NOT re-fetched: authorization means possessing a validly
 *    signed token, not "the user row still exists"
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::server::state::AppState;

/// The authenticated principal: the verified token's subject.
#[derive(Clone, Debug)]
pub struct AuthUser {
    /// User id asserted by the token
    pub user_id: Uuid,
}

/// Pull the token out of `"<scheme> <token>"`, any scheme.
fn bearer_token(header: &str) -> Option<&str> {
    header.split_whitespace().nth(1)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing authorization header");
                ApiError::Unauthenticated
            })?;

        let token = bearer_token(auth_header).ok_or_else(|| {
            tracing::warn!("Authorization header has no token segment");
            ApiError::Unauthenticated
        })?;

        let user_id = state.jwt.verify(token).map_err(|e| {
            tracing::warn!(reason = %e, "Token verification failed");
            ApiError::Unauthenticated
        })?;

        Ok(AuthUser { user_id })
    }
}
