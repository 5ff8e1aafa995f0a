use axum::http::HeaderMap;

use crate::auth::tokens::TokenService;
use crate::auth::{AuthError, Principal};

/// Extract the Bearer token from the Authorization header
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingHeader)?;

    // Expected format: "Bearer <token>"
    let parts: Vec<&str> = auth_header.split_whitespace().collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return Err(AuthError::MalformedHeader);
    }

    Ok(parts[1])
}

/// Validate the access token and resolve the calling principal
pub async fn validate_auth(
    headers: &HeaderMap,
    tokens: &TokenService,
) -> Result<Principal, AuthError> {
    let token = bearer_token(headers)?;

    tokens.verify_access(token).inspect_err(|e| {
        tracing::warn!("Rejected bearer token: {}", e);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chrono::Duration;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Ok("abc.def"));
        assert_eq!(bearer_token(&HeaderMap::new()), Err(AuthError::MissingHeader));
        assert_eq!(bearer_token(&headers("Token abc")), Err(AuthError::MalformedHeader));
        assert_eq!(bearer_token(&headers("Bearer")), Err(AuthError::MalformedHeader));
        assert_eq!(bearer_token(&headers("Bearer a b")), Err(AuthError::MalformedHeader));
    }

    #[tokio::test]
    async fn test_validate_auth_resolves_principal() {
        let tokens = TokenService::new(b"secret", Duration::seconds(60), Duration::seconds(60));
        let pair = tokens.issue_pair(11).unwrap();

        let principal = validate_auth(&headers(&format!("Bearer {}", pair.access)), &tokens)
            .await
            .unwrap();
        assert_eq!(principal, Principal::new(11));

        let rejected = validate_auth(&headers(&format!("Bearer {}", pair.refresh)), &tokens).await;
        assert_eq!(rejected, Err(AuthError::WrongTokenType));
    }
}
