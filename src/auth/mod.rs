pub mod tokens;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The authenticated identity behind a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: i64,
}

impl Principal {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingHeader,
    #[error("Invalid authorization header format. Expected: Bearer <token>")]
    MalformedHeader,
    #[error("Token is invalid or expired")]
    InvalidToken,
    #[error("Token has wrong type")]
    WrongTokenType,
    #[error("No active account found with the given credentials")]
    InvalidCredentials,
    #[error("Failed to issue token")]
    Issue,
}
