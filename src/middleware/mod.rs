//! Middleware Module
//!
//! Request-processing middleware for the backend.
//!
//! Currently this is the authentication gate: the `AuthUser` extractor that
//! protected handlers take as a parameter.

pub mod auth;

pub use auth::AuthUser;
