use crate::domain::error::DomainError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Turns a `DomainError` into `{"error": code, "message": text}` with the
/// matching status. Storage and configuration failures are logged and
/// reported without their details.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::Unauthenticated => StatusCode::UNAUTHORIZED,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Database(_) | DomainError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self.0 {
            DomainError::Database(_) | DomainError::Config(_) => {
                tracing::error!(error = %self.0, "Request failed");
                "Internal server error".to_string()
            }
            // Same text for foreign and missing ids.
            DomainError::NotFound(_) => "Trade not found".to_string(),
            other => other.to_string(),
        };

        (
            status,
            Json(serde_json::json!({ "error": self.0.code(), "message": message })),
        )
            .into_response()
    }
}
