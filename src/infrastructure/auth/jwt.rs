use crate::domain::error::DomainError;
use crate::domain::ports::identity_provider::IdentityProvider;
use crate::domain::values::owner_id::OwnerId;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Owner id.
    sub: String,
    exp: i64,
    iat: i64,
}

/// HS256 bearer tokens whose `sub` claim is the owner id.
pub struct JwtIdentity {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtIdentity {
    pub fn new(secret: &str) -> Result<Self, DomainError> {
        if secret.is_empty() {
            return Err(DomainError::Config("JWT secret must not be empty".into()));
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    pub fn issue(&self, owner: &OwnerId, ttl: Duration) -> Result<String, DomainError> {
        let now = Utc::now();
        let expires = now
            .checked_add_signed(ttl)
            .ok_or_else(|| DomainError::Config(format!("Token lifetime out of range: {ttl}")))?;
        let claims = Claims {
            sub: owner.as_str().to_string(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| DomainError::Config(format!("Failed to sign token: {e}")))
    }
}

#[async_trait]
impl IdentityProvider for JwtIdentity {
    async fn authenticate(&self, bearer_token: &str) -> Result<OwnerId, DomainError> {
        let data = decode::<Claims>(bearer_token, &self.decoding, &Validation::default()).map_err(|e| {
            tracing::warn!(error = %e, "Rejected bearer token");
            DomainError::Unauthenticated
        })?;
        OwnerId::new(data.claims.sub).map_err(|_| DomainError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_issued_token_authenticates_owner() {
        let jwt = JwtIdentity::new("test-secret").unwrap();
        let owner = OwnerId::new("user-42").unwrap();
        let token = jwt.issue(&owner, Duration::hours(1)).unwrap();
        assert_eq!(jwt.authenticate(&token).await.unwrap(), owner);
    }

    #[tokio::test]
    async fn test_rejects_foreign_signature() {
        let ours = JwtIdentity::new("ours").unwrap();
        let theirs = JwtIdentity::new("theirs").unwrap();
        let token = theirs
            .issue(&OwnerId::new("user-42").unwrap(), Duration::hours(1))
            .unwrap();
        assert!(matches!(
            ours.authenticate(&token).await,
            Err(DomainError::Unauthenticated)
        ));
    }

    #[tokio::test]
    async fn test_rejects_expired_and_garbage_tokens() {
        let jwt = JwtIdentity::new("test-secret").unwrap();
        let expired = jwt
            .issue(&OwnerId::new("user-42").unwrap(), Duration::hours(-2))
            .unwrap();
        assert!(jwt.authenticate(&expired).await.is_err());
        assert!(jwt.authenticate("not-a-jwt").await.is_err());
    }

    #[test]
    fn test_out_of_range_lifetime_is_config_error() {
        let jwt = JwtIdentity::new("test-secret").unwrap();
        let owner = OwnerId::new("user-42").unwrap();
        assert!(matches!(
            jwt.issue(&owner, Duration::MAX),
            Err(DomainError::Config(_))
        ));
    }

    #[test]
    fn test_empty_secret_is_config_error() {
        assert!(matches!(JwtIdentity::new(""), Err(DomainError::Config(_))));
    }
}
