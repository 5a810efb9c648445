use crate::api::error::ApiError;
use crate::api::server::AppState;
use crate::domain::error::DomainError;
use crate::domain::values::owner_id::OwnerId;
use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use std::sync::Arc;

/// The owner behind the request's `Authorization: Bearer` header.
pub struct AuthenticatedOwner(pub OwnerId);

impl FromRequestParts<Arc<AppState>> for AuthenticatedOwner {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        let Some(token) = token else {
            tracing::warn!(path = %parts.uri.path(), "Missing or invalid Authorization header");
            return Err(DomainError::Unauthenticated.into());
        };

        let identity = state.identity.clone();
        let owner = identity.authenticate(&token).await?;
        Ok(AuthenticatedOwner(owner))
    }
}
