use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::response::ErrorDetail;
use crate::auth::AuthError;
use crate::errors::StoreError;
use crate::utils::validation::FieldErrors;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Validation(FieldErrors),
    Unauthorized(String),
    NotFound(String),
    InternalError(String),
    DatabaseError(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }

    pub fn database_error(msg: impl Into<String>) -> Self {
        Self::DatabaseError(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) | ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Validation(_) => "Validation failed".to_string(),
            ApiError::Unauthorized(msg) => msg.clone(),
            ApiError::NotFound(msg) => format!("{} not found", msg),
            ApiError::InternalError(msg) => msg.clone(),
            ApiError::DatabaseError(msg) => msg.clone(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Issue => ApiError::internal_error(err.to_string()),
            other => ApiError::unauthorized(other.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(fields) => ApiError::Validation(fields),
            StoreError::NotFound(resource) => ApiError::not_found(resource),
            StoreError::Auth(auth) => auth.into(),
            StoreError::Hashing(msg) => {
                tracing::error!("Password hashing failed: {}", msg);
                ApiError::internal_error("Internal server error")
            }
            StoreError::Database(e) => {
                tracing::error!("Database error: {}", e);
                ApiError::database_error("Database error")
            }
        }
    }
}

/// Maps processor failures onto HTTP errors, keeping typed store and auth errors intact.
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<StoreError>() {
            Ok(store) => return store.into(),
            Err(err) => err,
        };

        let err = match err.downcast::<AuthError>() {
            Ok(auth) => return auth.into(),
            Err(err) => err,
        };

        tracing::error!("Action processing failed: {:#}", err);
        ApiError::internal_error("Internal server error")
    }
}

/// Validation failures answer with the field map itself, everything else with `{"detail": ...}`.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(fields) => (status, Json(fields)).into_response(),
            other => (status, Json(ErrorDetail::new(other.message()))).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    async fn body_of(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_store_errors_map_to_statuses() {
        let validation: ApiError = StoreError::field("amount", "Amount must be greater than 0.").into();
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        let missing: ApiError = StoreError::NotFound("Expense").into();
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let auth: ApiError = StoreError::Auth(AuthError::InvalidCredentials).into();
        assert_eq!(auth.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_anyhow_errors_are_downcast() {
        let err: ApiError = anyhow::Error::from(StoreError::NotFound("Expense")).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err: ApiError = anyhow::Error::from(AuthError::WrongTokenType).into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let err: ApiError = anyhow::anyhow!("pool exhausted").into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn test_not_found_names_the_resource() {
        assert_eq!(ApiError::from(StoreError::NotFound("Expense")).message(), "Expense not found");
        assert_eq!(ApiError::from(StoreError::NotFound("User")).message(), "User not found");
    }

    #[tokio::test]
    async fn test_validation_body_is_the_field_map() {
        let mut fields = FieldErrors::single("amount", "Amount must be greater than 0.");
        fields.add("category", "\"Groceries\" is not a valid choice.");

        let (status, body) = body_of(ApiError::Validation(fields)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "amount": ["Amount must be greater than 0."],
                "category": ["\"Groceries\" is not a valid choice."]
            })
        );
    }

    #[tokio::test]
    async fn test_other_errors_carry_detail() {
        let (status, body) = body_of(StoreError::NotFound("Expense").into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Expense not found" }));

        let (status, body) = body_of(AuthError::InvalidCredentials.into()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "detail": "No active account found with the given credentials" }));
    }
}
