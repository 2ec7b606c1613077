//! Error Module
//!
//! API error taxonomy and HTTP response conversion.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # Taxonomy
//!
//! - `Unauthenticated` → 401 (missing/invalid/expired token, bad credentials)
//! - `Validation` → 422 (blank tweet text)
//! - `Conflict` → 422 (duplicate username or email on signup)
//! - `NotFound` → 404 (missing non-auth resources)
//! - `Internal` → 500 (unexpected store or crypto failure)
//!
//! Handler-level errors never propagate uncaught: every handler returns
//! `Result<_, ApiError>` and the `IntoResponse` implementation maps the
//! variant to its status code and a JSON body.

/// Error conversion implementations
pub mod conversion;

/// Error type definitions
pub mod types;

// Re-export commonly used types
pub use types::ApiError;
