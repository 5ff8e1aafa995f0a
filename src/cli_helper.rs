use anyhow::Result;

use crate::action_router::{ActionRouterInput, ActionRouterOutput};
use crate::api::config::ApiConfig;
use crate::utils::app_config::AppConfig;

/// Initialize AppConfig for CLI operations
pub fn initialize_app_config() -> Result<AppConfig> {
    let _ = dotenvy::dotenv();
    AppConfig::from_env(&ApiConfig::from_env()?)
}

/// Execute an action through the ActionRouter
pub async fn call_action_router(input: ActionRouterInput, app_config: AppConfig) -> Result<ActionRouterOutput> {
    input.process(app_config).await
}
