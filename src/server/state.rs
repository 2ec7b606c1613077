/**
 * Application State Management
 *
 * Defines the application state shared across request handlers and the
 * `FromRef` implementations for Axum state extraction.
 *
 * # Thread Safety
 *
 * Both fields are cheap to clone and safe for concurrent use: the sqlx pool
 * manages its own connections, and the signing keys are read-only after
 * startup. There is no other cross-request shared state.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::token::JwtKeys;

/// Application state shared across handlers.
///
/// Handlers can extract the whole state with `State<AppState>`, or a single
/// field via the `FromRef` implementations below.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (process lifetime, concurrent-safe)
    pub db_pool: SqlitePool,
    /// Immutable JWT signing/verification keys, built once from config
    pub jwt: JwtKeys,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.jwt.clone()
    }
}
