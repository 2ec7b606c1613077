/**
 * Signup Handler
 *
 * POST /signup - user registration.
 *
 * # Registration Process
 *
 * 1. Hash the password with bcrypt
 * 2. Create the user; a duplicate username or email maps to 422 via the
 *    store's unique-constraint signal
 * 3. Issue a JWT (signup implicitly logs the user in)
 * 4. Return the public profile and the token
 *
 * # Errors
 *
 * - `422 Unprocessable Entity` - username or email already exists
 * - `500 Internal Server Error` - hashing, storage, or signing failure
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::auth::password::hash_password;
use crate::auth::users::create_user;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Signup handler.
///
/// Creates the user and returns the same response shape as login, so a
/// freshly registered client is immediately authenticated.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!(username = %request.username, "Signup request");

    let password_hash = hash_password(&request.password)?;

    // A duplicate username/email becomes ApiError::Conflict through the
    // sqlx::Error conversion
    let user = create_user(
        &state.db_pool,
        request.name,
        request.username,
        request.email,
        password_hash,
    )
    .await?;

    let token = state
        .jwt
        .issue(user.id)
        .map_err(|e| ApiError::Internal(format!("token signing error: {e}")))?;

    tracing::info!(user_id = %user.id, username = %user.username, "User created");

    Ok(Json(AuthResponse::new(&user, token)))
}
