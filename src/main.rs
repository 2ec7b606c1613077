/**
 * Chirp Server Entry Point
 *
 * Boot order: load .env, initialize tracing, load and validate configuration
 * (missing JWT_SECRET aborts startup), build the app, serve.
 */

use chirp::server::{create_app, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing with env filter support (RUST_LOG)
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    // Configuration is validated up front: the process does not start
    // without a signing secret.
    let config = AppConfig::from_env()?;

    let app = create_app(&config).await?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
