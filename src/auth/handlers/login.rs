/**
 * Login Handler
 *
 * GET /login - user authentication.
 *
 * Credentials arrive as `base64(email:password)` in the second segment of
 * the Authorization header (a custom basic-style encoding kept for wire
 * compatibility with existing clients; the scheme token is ignored).
 *
 * # Authentication Process
 *
 * 1. Decode the credentials from the header
 * 2. Look up the user by email
 * 3. Verify the password against the stored bcrypt hash
 * 4. Issue a JWT and return it with the public profile
 *
 * # Security
 *
 * Every failure - undecodable header, unknown email, wrong password -
 * returns the same 401, so clients cannot probe which emails exist.
 */

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    response::Json,
};
use base64::Engine;

use crate::auth::handlers::types::AuthResponse;
use crate::auth::password::verify_password;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Decode `base64(email:password)` from the Authorization header.
///
/// Expected shape: `"<scheme> <base64>"`. The scheme is not inspected; the
/// plaintext is split on the first colon, so passwords may contain colons.
fn decode_credentials(headers: &HeaderMap) -> Result<(String, String), ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::Unauthenticated)?;

    let encoded = header
        .split_whitespace()
        .nth(1)
        .ok_or(ApiError::Unauthenticated)?;

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|_| ApiError::Unauthenticated)?;
    let decoded = String::from_utf8(decoded).map_err(|_| ApiError::Unauthenticated)?;

    let (email, password) = decoded.split_once(':').ok_or(ApiError::Unauthenticated)?;

    Ok((email.to_string(), password.to_string()))
}

/// Login handler.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AuthResponse>, ApiError> {
    let (email, password) = decode_credentials(&headers)?;

    let user = get_user_by_email(&state.db_pool, &email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login attempt for unknown email");
            ApiError::Unauthenticated
        })?;

    let matched = verify_password(&password, &user.password_hash)?;
    if !matched {
        tracing::warn!(user_id = %user.id, "Login attempt with wrong password");
        return Err(ApiError::Unauthenticated);
    }

    let token = state
        .jwt
        .issue(user.id)
        .map_err(|e| ApiError::Internal(format!("token signing error: {e}")))?;

    tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

    Ok(Json(AuthResponse::new(&user, token)))
}
