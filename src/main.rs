use dotenvy::dotenv;
use std::env;

use expense_tracker_backend::api::{config::ApiConfig, routes::build_router};
use expense_tracker_backend::utils::app_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    // Load API configuration
    let api_config = ApiConfig::from_env()?;

    tracing::info!("API configuration loaded successfully");

    // Load AppConfig (database pool and token keys)
    let app_config = AppConfig::from_env(&api_config)?;
    tracing::info!("Application configuration loaded successfully");

    let router = build_router(app_config);

    let addr = format!("0.0.0.0:{}", api_config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting expense tracker API on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
