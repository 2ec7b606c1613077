/**
 * Router Configuration
 *
 * Assembles all routes into a single Axum router.
 *
 * # Routes
 *
 * - `GET  /tweets` - list tweets (bearer token required)
 * - `POST /tweets` - create a tweet (bearer token required)
 * - `POST /signup` - user registration (public)
 * - `GET  /login`  - user authentication (basic-style header)
 * - `GET  /auth`   - token check (bearer token required)
 *
 * Protected routes carry no explicit middleware layer: the `AuthUser`
 * extractor in each protected handler's signature is the gate.
 */

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::handlers::{check_auth, login, signup};
use crate::server::state::AppState;
use crate::tweets::handlers::{create_tweet, list_tweets};

/// Create the Axum router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/tweets", get(list_tweets).post(create_tweet))
        .route("/signup", post(signup))
        .route("/login", get(login))
        .route("/auth", get(check_auth))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
