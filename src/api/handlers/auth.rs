use axum::{extract::State, http::StatusCode, Json};

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{error::ApiError, extractors::JsonBody},
    auth::tokens::{AccessToken, TokenPair},
    errors::StoreError,
    users::{
        db_types::UserRecord,
        processor_enums::{
            ObtainTokenPairInputArgs, RefreshTokenInputArgs, RegisterUserInputArgs,
            UsersProcessorInput, UsersProcessorOutput,
        },
    },
    utils::{app_config::AppConfig, validation::REQUIRED},
};

/// POST /api/register/ - Create a user account
pub async fn register(
    State(app_config): State<AppConfig>,
    JsonBody(args): JsonBody<RegisterUserInputArgs>,
) -> Result<(StatusCode, Json<UserRecord>), ApiError> {
    let action = ActionRouterInput::Users(UsersProcessorInput::Register(args));

    match action.process(app_config).await? {
        ActionRouterOutput::Users(UsersProcessorOutput::Register(user)) => {
            Ok((StatusCode::CREATED, Json(user)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// POST /api/token/ - Exchange credentials for an access/refresh pair
pub async fn obtain_token_pair(
    State(app_config): State<AppConfig>,
    JsonBody(args): JsonBody<ObtainTokenPairInputArgs>,
) -> Result<(StatusCode, Json<TokenPair>), ApiError> {
    let action = ActionRouterInput::Users(UsersProcessorInput::ObtainTokenPair(args));

    match action.process(app_config).await? {
        ActionRouterOutput::Users(UsersProcessorOutput::ObtainTokenPair(pair)) => {
            Ok((StatusCode::OK, Json(pair)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// POST /api/token/refresh/ - Exchange a refresh token for a new access token
pub async fn refresh_token(
    State(app_config): State<AppConfig>,
    JsonBody(args): JsonBody<RefreshTokenInputArgs>,
) -> Result<(StatusCode, Json<AccessToken>), ApiError> {
    let refresh = args
        .refresh
        .ok_or_else(|| StoreError::field("refresh", REQUIRED))?;

    let access = app_config.tokens.refresh(&refresh)?;

    Ok((StatusCode::OK, Json(access)))
}
