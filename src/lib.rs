//! Chirp Backend
//!
//! A minimal authenticated microblogging backend: users sign up, log in, and
//! post/read short text tweets. HTTP endpoints are backed by a SQLite store
//! (via sqlx), guarded by JWT bearer authentication and bcrypt password
//! hashing.
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Configuration, application state, server initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, JWT tokens, user storage, auth handlers
//! - **`middleware`** - The authentication gate (bearer token extractor)
//! - **`tweets`** - Tweet storage and handlers
//! - **`error`** - API error taxonomy and HTTP response conversion
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs          - Module exports
//! ├── main.rs         - Server entry point
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Hashing, tokens, users, handlers
//! ├── middleware/     - Auth gate extractor
//! ├── tweets/         - Tweet storage and handlers
//! └── error/          - Error types and conversions
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: `POST /signup` → password hashed (bcrypt) → user created →
//!    JWT returned (signup implicitly logs the user in)
//! 2. **Login**: `GET /login` with `base64(email:password)` in the
//!    Authorization header → credentials verified → JWT returned
//! 3. **Protected routes**: `Authorization: <scheme> <jwt>` → token verified
//!    (signature + expiry) → subject id available to the handler
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never serialized
//!   outward
//! - Tokens are stateless HS256 JWTs expiring 24 hours after issuance
//! - All authentication failures collapse to 401 for clients; the precise
//!   reason (expired vs malformed vs bad signature) is only logged

/// Password hashing, JWT tokens, user storage, and auth endpoint handlers
pub mod auth;

/// API error taxonomy and HTTP response conversion
pub mod error;

/// Authentication gate applied to protected endpoints
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server configuration, state, and initialization
pub mod server;

/// Tweet storage and handlers
pub mod tweets;

// Re-export commonly used types
pub use error::ApiError;
pub use server::state::AppState;
pub use server::{create_app, AppConfig};
