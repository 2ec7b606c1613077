//! Tweets Module
//!
//! Tweet storage and the protected read/create endpoints.
//!
//! # Module Structure
//!
//! ```text
//! tweets/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Tweet model and database operations
//! └── handlers.rs - GET /tweets and POST /tweets handlers
//! ```
//!
//! Both endpoints sit behind the authentication gate. The author of a
//! created tweet is always the verified token subject, never client input.

/// Tweet model and database operations
pub mod db;

/// HTTP handlers for tweet endpoints
pub mod handlers;

// Re-export commonly used types
pub use db::Tweet;
pub use handlers::{create_tweet, list_tweets};
