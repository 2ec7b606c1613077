/**
 * Token Check Handler
 *
 * GET /auth - returns 200 when the presented bearer token is valid.
 *
 * All verification happens in the `AuthUser` extractor; reaching the handler
 * body means the token passed. Clients use this to validate a stored token
 * without touching any resource.
 */

use axum::http::StatusCode;

use crate::middleware::auth::AuthUser;

/// Token check handler.
pub async fn check_auth(AuthUser { user_id }: AuthUser) -> StatusCode {
    tracing::debug!(%user_id, "Token check passed");
    StatusCode::OK
}
