use axum::{
    Router,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{
    error::ApiError,
    handlers::{auth::*, expenses::*, health},
    middleware::auth::validate_auth,
};
use crate::utils::app_config::AppConfig;

pub fn build_router(app_config: AppConfig) -> Router {
    let tokens = app_config.tokens.clone();

    // Resolves the caller and hands it to handlers as an `Extension<Principal>`
    let auth_layer = middleware::from_fn(move |mut req: axum::extract::Request, next: Next| {
        let tokens = tokens.clone();
        async move {
            let principal = validate_auth(req.headers(), &tokens).await?;
            req.extensions_mut().insert(principal);
            Ok::<Response, ApiError>(next.run(req).await)
        }
    });

    let expense_routes = Router::new()
        .route("/api/expenses/", get(get_expenses).post(create_expense))
        .route(
            "/api/expenses/:id/",
            get(get_expense_by_id)
                .put(replace_expense)
                .patch(patch_expense)
                .delete(delete_expense),
        )
        .route_layer(auth_layer);

    Router::new()
        // Health check - public endpoint
        .route("/health", get(health::health))
        // Auth collaborator endpoints - public
        .route("/api/token/", post(obtain_token_pair))
        .route("/api/token/refresh/", post(refresh_token))
        .route("/api/register/", post(register))
        .merge(expense_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_config)
}
