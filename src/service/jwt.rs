//! JWT Authentication Service
//!
//! Issues and validates the access tokens that carry the caller's identity
//! and role claim. The account core trusts the decoded claim pair as given.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::models::{AccessTokenClaims, CallerClaims, Role};

/// Errors surfaced by token encoding and validation
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token encoding error: {0}")]
    Encoding(jsonwebtoken::errors::Error),

    #[error("Invalid or expired token")]
    Invalid,
}

/// Stateless JWT service for access-token management
#[derive(Clone)]
pub struct JwtService {
    secret: String,
    expires_in: Duration,
}

impl JwtService {
    /// Create a new JWT service with the default one-hour token lifetime
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            expires_in: Duration::hours(1),
        }
    }

    /// Create a new JWT service with a custom token lifetime
    pub fn with_expiration(secret: String, expires_in: Duration) -> Self {
        Self { secret, expires_in }
    }

    /// Access token lifetime in seconds, for response metadata
    pub fn expires_in_seconds(&self) -> i64 {
        self.expires_in.num_seconds()
    }

    /// Issue an access token for the given subject and role
    pub fn create_access_token(&self, subject: &str, role: Role) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = AccessTokenClaims::new(subject, role.as_str(), now + self.expires_in, now);

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(JwtError::Encoding)
    }

    /// Validate an access token and extract the caller claim pair
    pub fn validate_access_token(&self, token: &str) -> Result<CallerClaims, JwtError> {
        let data = decode::<AccessTokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| JwtError::Invalid)?;

        Ok(CallerClaims::new(&data.claims.sub, &data.claims.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::new("test_secret_key".to_string())
    }

    #[test]
    fn test_token_round_trip() {
        let service = test_service();
        let token = service
            .create_access_token("user@example.com", Role::Manager)
            .unwrap();

        let claims = service.validate_access_token(&token).unwrap();
        assert_eq!(claims.subject, "user@example.com");
        assert_eq!(claims.role, "MANAGER");
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = test_service();
        let token = service
            .create_access_token("user@example.com", Role::Admin)
            .unwrap();

        let mut tampered = token.clone();
        tampered.push('x');
        assert!(service.validate_access_token(&tampered).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = test_service()
            .create_access_token("user@example.com", Role::Admin)
            .unwrap();

        let other = JwtService::new("different_secret".to_string());
        assert!(other.validate_access_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let service =
            JwtService::with_expiration("test_secret_key".to_string(), Duration::seconds(-120));
        let token = service
            .create_access_token("user@example.com", Role::Admin)
            .unwrap();

        assert!(service.validate_access_token(&token).is_err());
    }
}
