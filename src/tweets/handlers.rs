/**
 * Tweet Handlers
 *
 * GET /tweets and POST /tweets. Both sit behind the authentication gate:
 * the `AuthUser` parameter rejects unauthenticated requests with 401 before
 * the body is read or the store is touched.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::tweets::db::{self, Tweet};

/// Create-tweet request body.
///
/// Only `text` is read; any client-supplied author field is ignored, the
/// author is always the verified token subject.
#[derive(Debug, Deserialize)]
pub struct CreateTweetRequest {
    /// Tweet text; must be non-blank after trimming
    pub text: String,
}

/// List all tweets.
pub async fn list_tweets(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Tweet>>, ApiError> {
    let tweets = db::list_tweets(&state.db_pool).await?;
    Ok(Json(tweets))
}

/// Create a tweet authored by the authenticated user.
///
/// # Errors
///
/// - `422 Unprocessable Entity` - blank or whitespace-only text; nothing is
///   written to the store
/// - `500 Internal Server Error` - store failure
pub async fn create_tweet(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreateTweetRequest>,
) -> Result<(StatusCode, Json<Tweet>), ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::Validation(
            "tweet text must not be blank".to_string(),
        ));
    }

    let tweet = db::create_tweet(&state.db_pool, auth.user_id, &request.text).await?;

    tracing::info!(tweet_id = %tweet.id, user_id = %auth.user_id, "Tweet created");

    Ok((StatusCode::CREATED, Json(tweet)))
}
