/**
 * Server Configuration
 *
 * Loads and validates configuration from environment variables. Unlike most
 * settings, the JWT signing secret has no default and no fallback: if it is
 * absent the process refuses to start, so a misconfigured deployment fails
 * at boot rather than at the first login.
 */

use std::net::SocketAddr;
use thiserror::Error;

/// Errors raised while loading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The token signing secret is not set. Fatal: tokens could neither be
    /// issued nor verified.
    #[error("JWT_SECRET must be set in the environment")]
    MissingJwtSecret,

    /// SERVER_PORT is set but is not a valid port number.
    #[error("SERVER_PORT is not a valid port: {0}")]
    InvalidPort(String),
}

/// Validated application configuration.
///
/// Built once at startup via [`AppConfig::from_env`] and passed by reference
/// afterwards; nothing re-reads the environment at request time.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// SQLite database URL (e.g. `sqlite:chirp.db`)
    pub database_url: String,
    /// Secret used to sign and verify JWT tokens
    pub jwt_secret: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// - `JWT_SECRET` - required, no default
    /// - `DATABASE_URL` - defaults to `sqlite:chirp.db`
    /// - `SERVER_PORT` - defaults to `3000`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingJwtSecret`] when no signing secret is
    /// configured, and [`ConfigError::InvalidPort`] when `SERVER_PORT` does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingJwtSecret)?;

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:chirp.db".to_string());

        let port_str = std::env::var("SERVER_PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port_str
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port_str))?;

        Ok(Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            database_url,
            jwt_secret,
        })
    }
}
