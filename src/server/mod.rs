//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports
//! ├── config.rs       - Configuration loading and validation
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Database connection, migrations, app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig::from_env` reads and validates the
//!    environment; a missing `JWT_SECRET` is a fatal startup error
//! 2. **Database**: connect the SQLite pool and run migrations
//! 3. **State**: build `AppState` (pool + immutable signing keys)
//! 4. **Router**: assemble all routes with middleware layers

/// Configuration loading and validation
pub mod config;

/// Server initialization
pub mod init;

/// Application state management
pub mod state;

// Re-export commonly used types
pub use config::{AppConfig, ConfigError};
pub use init::create_app;
pub use state::AppState;
