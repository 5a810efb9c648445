use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    /// Machine-readable code surfaced to API callers.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Unauthenticated => "unauthorized",
            DomainError::NotFound(_) => "not_found",
            DomainError::Validation(_) => "validation_error",
            DomainError::Database(_) | DomainError::Config(_) => "internal_error",
        }
    }
}
