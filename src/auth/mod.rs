//! Authentication Module
//!
//! User authentication, registration, and stateless sessions.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── password.rs     - bcrypt hashing and verification
//! ├── token.rs        - JWT issuance and verification
//! ├── users.rs        - User model and database operations
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── check.rs    - Token check handler
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10) before storage
//! - Tokens are stateless HS256 JWTs expiring after 24 hours
//! - Invalid credentials always return 401 (no information leakage about
//!   whether the email exists or the password mismatched)

/// HTTP handlers for authentication endpoints
pub mod handlers;

/// Password hashing and verification
pub mod password;

/// JWT token issuance and verification
pub mod token;

/// User model and database operations
pub mod users;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, SignupRequest};
pub use handlers::{check_auth, login, signup};
pub use token::{JwtKeys, TokenError};
