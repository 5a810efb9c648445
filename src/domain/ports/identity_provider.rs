use crate::domain::error::DomainError;
use crate::domain::values::owner_id::OwnerId;
use async_trait::async_trait;

/// Resolves the caller of a request to an owner.
/// Implementations may verify locally (JWT) or call out to an auth service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns `DomainError::Unauthenticated` for any token it cannot vouch for.
    async fn authenticate(&self, bearer_token: &str) -> Result<OwnerId, DomainError>;
}
