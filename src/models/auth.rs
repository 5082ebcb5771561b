//! Authentication Models
//!
//! JWT claim structures and the caller context asserted by the upstream
//! authentication layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject: account id or email
    pub sub: String,
    /// Role name as a string; consumers normalize via the access policy
    pub role: String,
    /// Expiration (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl AccessTokenClaims {
    pub fn new(subject: &str, role: &str, expires_at: DateTime<Utc>, issued_at: DateTime<Utc>) -> Self {
        Self {
            sub: subject.to_string(),
            role: role.to_string(),
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
        }
    }
}

/// Identity/role claim of the authenticated caller.
///
/// The pair is asserted by the authentication layer and trusted as given;
/// the subject may be an account id or an email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerClaims {
    pub subject: String,
    pub role: String,
}

impl CallerClaims {
    pub fn new(subject: &str, role: &str) -> Self {
        Self {
            subject: subject.to_string(),
            role: role.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_access_token_claims_timestamps() {
        let now = Utc::now();
        let claims = AccessTokenClaims::new("user@example.com", "ADMIN", now + Duration::hours(1), now);

        assert_eq!(claims.sub, "user@example.com");
        assert_eq!(claims.role, "ADMIN");
        assert_eq!(claims.exp - claims.iat, 3600);
    }
}
