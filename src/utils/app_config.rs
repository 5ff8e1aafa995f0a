use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Duration;

use crate::api::config::ApiConfig;
use crate::auth::tokens::TokenService;
use crate::utils::db::{DbPool, build_pool};

const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pool: DbPool,
    pub tokens: Arc<TokenService>,
}

impl AppConfig {
    pub fn new(pool: DbPool, tokens: TokenService) -> Self {
        Self {
            pool,
            tokens: Arc::new(tokens),
        }
    }

    pub fn from_env(api_config: &ApiConfig) -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .context("DATABASE_URL must be set in .env file or environment variables")?;

        let pool_size = match std::env::var("DATABASE_POOL_SIZE") {
            Ok(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("Invalid DATABASE_POOL_SIZE: {}", raw))?,
            Err(_) => DEFAULT_POOL_SIZE,
        };

        let pool = build_pool(&database_url, pool_size)?;

        let tokens = TokenService::new(
            api_config.secret_key.as_bytes(),
            Duration::seconds(api_config.access_token_ttl_secs),
            Duration::seconds(api_config.refresh_token_ttl_secs),
        );

        Ok(Self::new(pool, tokens))
    }
}
