/**
 * Server Initialization
 *
 * Connects the database, runs migrations, builds the application state, and
 * assembles the router.
 *
 * The store is mandatory: a connection or migration failure aborts startup
 * instead of degrading into a database-less server.
 */

use std::str::FromStr;

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::auth::token::JwtKeys;
use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Connect the SQLite pool and bring the schema up to date.
///
/// # Errors
///
/// Returns the underlying sqlx error when the URL is invalid, the connection
/// fails, or a migration cannot be applied.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    tracing::info!("Running database migrations");
    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

/// Create and configure the Axum application.
///
/// # Errors
///
/// Fails when the database cannot be connected or migrated. The signing keys
/// are built from the already-validated config, so token setup cannot fail
/// here.
pub async fn create_app(config: &AppConfig) -> Result<Router, sqlx::Error> {
    let db_pool = connect_database(&config.database_url).await?;

    let state = AppState {
        db_pool,
        jwt: JwtKeys::from_secret(&config.jwt_secret),
    };

    Ok(create_router(state))
}
