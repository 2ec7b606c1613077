//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - POST /signup - user registration
//! ├── login.rs    - GET /login - user authentication
//! └── check.rs    - GET /auth - token check
//! ```

/// Token check handler
pub mod check;

/// Login handler
pub mod login;

/// Signup handler
pub mod signup;

/// Request and response types
pub mod types;

// Re-export handlers and commonly used types
pub use check::check_auth;
pub use login::login;
pub use signup::signup;
pub use types::{AuthResponse, SignupRequest};
