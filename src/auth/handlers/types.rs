/**
 * Authentication Handler Types
 *
 * Request and response types shared by the signup and login handlers. Wire
 * field names are camelCase to match existing clients.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Signup request body.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Display name
    pub name: String,
    /// Unique username
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Plaintext password (hashed before storage, never logged)
    pub password: String,
}

/// Response returned by both signup and login.
///
/// Carries the public profile fields and a fresh access token; the password
/// hash is never part of any response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// User id
    pub id: String,
    /// Display name
    pub name: String,
    /// Username
    pub username: String,
    /// Email address
    pub email: String,
    /// Signed bearer token, valid for 24 hours
    pub access_token: String,
}

impl AuthResponse {
    /// Build the response from a user record and a freshly issued token.
    pub fn new(user: &User, access_token: String) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            access_token,
        }
    }
}
