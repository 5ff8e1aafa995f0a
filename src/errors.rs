use thiserror::Error;

use crate::auth::AuthError;
use crate::utils::validation::FieldErrors;

/// Failures surfaced by the expense and user stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Validation failed: {0}")]
    Validation(#[from] FieldErrors),

    /// Absent, or owned by another principal. The two are never distinguished.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
}

impl StoreError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        Self::Validation(FieldErrors::single(field, message))
    }
}
