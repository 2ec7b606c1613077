//! Common test utilities
//!
//! Builds the real router against a hermetic in-memory SQLite database and
//! provides helpers for creating users and authorization headers.

use axum_test::TestServer;
use chirp::auth::token::JwtKeys;
use chirp::routes::create_router;
use chirp::server::state::AppState;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Signing secret used by every test server.
pub const TEST_JWT_SECRET: &str = "test-secret-key-must-be-at-least-32-chars-long!";

/// Spin up a test server backed by a fresh in-memory database.
pub async fn test_server() -> TestServer {
    let (server, _pool) = test_server_with_pool().await;
    server
}

/// Like [`test_server`], also handing back the pool for direct store
/// assertions.
pub async fn test_server_with_pool() -> (TestServer, SqlitePool) {
    // A single connection keeps the in-memory database alive and shared
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let state = AppState {
        db_pool: pool.clone(),
        jwt: JwtKeys::from_secret(TEST_JWT_SECRET),
    };

    let server = TestServer::new(create_router(state)).expect("Failed to start test server");
    (server, pool)
}

/// Sign up a user through the API and return the response body
/// (`{id, name, username, email, accessToken}`).
pub async fn signup_user(
    server: &TestServer,
    username: &str,
    email: &str,
    password: &str,
) -> serde_json::Value {
    let response = server
        .post("/signup")
        .json(&serde_json::json!({
            "name": format!("Test {username}"),
            "username": username,
            "email": email,
            "password": password,
        }))
        .await;

    assert_eq!(response.status_code(), axum::http::StatusCode::OK);
    response.json()
}

/// Bearer authorization header value.
pub fn auth_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Basic-style login header value: `Basic base64(email:password)`.
pub fn login_header(email: &str, password: &str) -> String {
    use base64::Engine;
    let encoded =
        base64::engine::general_purpose::STANDARD.encode(format!("{email}:{password}"));
    format!("Basic {encoded}")
}
