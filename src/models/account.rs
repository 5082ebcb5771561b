//! Account Model
//!
//! Core account data structures: the public account representation, the
//! internal row carrying credential and token state, and the closed role
//! enumeration used for authorization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::utils::security::{is_expired, tokens_match};

/// Authorization level attached to every account.
///
/// Stored as a fixed-case Postgres enum; comparisons at the API boundary are
/// case-insensitive via [`Role::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Registered but not yet email-verified
    Anonymous,
    /// Verified account
    Authenticated,
    /// Can administer accounts below admin level
    Manager,
    /// Full administrative access
    Admin,
}

impl Role {
    /// Canonical fixed-case name, matching storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Anonymous => "ANONYMOUS",
            Role::Authenticated => "AUTHENTICATED",
            Role::Manager => "MANAGER",
            Role::Admin => "ADMIN",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Anonymous
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role string does not name a known role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole;

impl FromStr for Role {
    type Err = UnknownRole;

    /// Case-insensitive parse; anything unknown is an error, never a wildcard
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ANONYMOUS" => Ok(Role::Anonymous),
            "AUTHENTICATED" => Ok(Role::Authenticated),
            "MANAGER" => Ok(Role::Manager),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(UnknownRole),
        }
    }
}

/// Account representation for external API responses
///
/// Carries no credential or token material. All datetime fields are UTC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Account email address (unique, normalized)
    pub email: String,

    /// URL-safe display handle (unique)
    pub nickname: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub github_profile_url: Option<String>,
    pub linkedin_profile_url: Option<String>,

    /// Authorization level
    pub role: Role,

    /// Whether the email address has been verified
    pub email_verified: bool,

    /// Whether the account is locked out of login
    pub is_locked: bool,

    /// Professional status flag, granted by managers and admins
    pub is_professional: bool,

    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Internal account representation including credential and token state
///
/// Used for database operations only; never exposed in API responses.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct AccountRow {
    pub id: Uuid,
    pub email: String,
    pub nickname: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub github_profile_url: Option<String>,
    pub linkedin_profile_url: Option<String>,
    pub role: Role,
    pub password_hash: String,
    pub email_verified: bool,
    pub verification_token: Option<String>,
    pub failed_login_attempts: i32,
    pub is_locked: bool,
    pub password_reset_token: Option<String>,
    pub password_reset_expires_at: Option<DateTime<Utc>>,
    pub is_professional: bool,
    pub professional_status_updated_at: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AccountRow {
    /// Display name used in outbound email: first name, else nickname
    pub(crate) fn display_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or(&self.nickname)
    }

    /// Whether `candidate` is the current, unexpired password-reset token.
    ///
    /// An expired token is treated as absent even though it is only
    /// physically cleared on a successful reset or a newer reset request.
    pub(crate) fn reset_token_is_valid(&self, candidate: &str) -> bool {
        if !tokens_match(candidate, self.password_reset_token.as_deref()) {
            return false;
        }
        match self.password_reset_expires_at {
            Some(expires_at) => !is_expired(expires_at),
            None => false,
        }
    }
}

impl From<AccountRow> for Account {
    /// Strip credential and token material for the public representation
    fn from(row: AccountRow) -> Self {
        Account {
            id: row.id,
            email: row.email,
            nickname: row.nickname,
            first_name: row.first_name,
            last_name: row.last_name,
            bio: row.bio,
            profile_picture_url: row.profile_picture_url,
            github_profile_url: row.github_profile_url,
            linkedin_profile_url: row.linkedin_profile_url,
            role: row.role,
            email_verified: row.email_verified,
            is_locked: row.is_locked,
            is_professional: row.is_professional,
            last_login_at: row.last_login_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_row() -> AccountRow {
        AccountRow {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            nickname: "clever_fox_123".to_string(),
            first_name: None,
            last_name: None,
            bio: None,
            profile_picture_url: None,
            github_profile_url: None,
            linkedin_profile_url: None,
            role: Role::Authenticated,
            password_hash: "$2b$04$notarealhash".to_string(),
            email_verified: true,
            verification_token: None,
            failed_login_attempts: 0,
            is_locked: false,
            password_reset_token: None,
            password_reset_expires_at: None,
            is_professional: false,
            professional_status_updated_at: None,
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_parse_case_insensitive() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("  manager ".parse::<Role>(), Ok(Role::Manager));
        assert!("root".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_display_round_trip() {
        for role in [Role::Anonymous, Role::Authenticated, Role::Manager, Role::Admin] {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_reset_token_validity() {
        let mut row = sample_row();

        // No token stored: nothing validates
        assert!(!row.reset_token_is_valid("anything"));
        assert!(!row.reset_token_is_valid(""));

        row.password_reset_token = Some("stored-token".to_string());
        row.password_reset_expires_at = Some(Utc::now() + Duration::minutes(30));
        assert!(row.reset_token_is_valid("stored-token"));
        assert!(!row.reset_token_is_valid("other-token"));

        // Expired token validates as absent
        row.password_reset_expires_at = Some(Utc::now() - Duration::minutes(1));
        assert!(!row.reset_token_is_valid("stored-token"));
    }

    #[test]
    fn test_account_conversion_strips_secrets() {
        let mut row = sample_row();
        row.verification_token = Some("secret".to_string());
        row.password_reset_token = Some("secret".to_string());
        row.password_reset_expires_at = Some(Utc::now());

        let account: Account = row.clone().into();
        assert_eq!(account.id, row.id);
        assert_eq!(account.email, row.email);
        assert_eq!(account.nickname, row.nickname);
        // The public type has no token or hash fields; conversion preserves
        // the visible profile only.
        let serialized = serde_json::to_string(&account).unwrap();
        assert!(!serialized.contains("secret"));
        assert!(!serialized.contains("password_hash"));
    }

    #[test]
    fn test_display_name_fallback() {
        let mut row = sample_row();
        assert_eq!(row.display_name(), "clever_fox_123");
        row.first_name = Some("Jane".to_string());
        assert_eq!(row.display_name(), "Jane");
    }
}
