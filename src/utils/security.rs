//! Security Utilities
//!
//! Password hashing, opaque token generation, and expiry checks.

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, Rng};

/// Default bcrypt cost for password hashing
pub const DEFAULT_BCRYPT_COST: u32 = DEFAULT_COST;

/// Length of generated verification and password-reset tokens.
///
/// 32 alphanumeric characters carry just under 191 bits of entropy,
/// comfortably above the 128-bit guessing-resistance floor.
pub const TOKEN_LENGTH: usize = 32;

/// Generate an opaque, URL-safe token for email verification or password reset
pub fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash_password_with_cost(password, DEFAULT_BCRYPT_COST)
}

/// Hash a password with custom bcrypt cost
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password, cost)
}

/// Verify a password against its bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, hash)
}

/// Timing-safe string comparison to prevent timing attacks
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (byte_a, byte_b) in a.bytes().zip(b.bytes()) {
        result |= byte_a ^ byte_b;
    }
    result == 0
}

/// Compare a candidate token against a stored token.
///
/// An absent stored token never matches, whatever the candidate looks like,
/// so a cleared token can never be "proven" with an empty or null candidate.
pub fn tokens_match(candidate: &str, stored: Option<&str>) -> bool {
    match stored {
        Some(stored) => constant_time_compare(candidate, stored),
        None => false,
    }
}

/// Create an expiration timestamp a number of minutes from now
pub fn create_expiration(duration_minutes: i64) -> DateTime<Utc> {
    Utc::now() + chrono::Duration::minutes(duration_minutes)
}

/// Generate a token together with its absolute expiry
pub fn generate_expiring_token(ttl_minutes: i64) -> (String, DateTime<Utc>) {
    (generate_token(), create_expiration(ttl_minutes))
}

/// Check whether a timestamp has expired
pub fn is_expired(expiry: DateTime<Utc>) -> bool {
    Utc::now() >= expiry
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_generate_token() {
        let token1 = generate_token();
        let token2 = generate_token();

        assert_eq!(token1.len(), TOKEN_LENGTH);
        assert_eq!(token2.len(), TOKEN_LENGTH);
        assert_ne!(token1, token2); // Should be different
        assert!(token1.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_password_hashing() {
        let password = "test_password_123";
        let hash = hash_password(password).unwrap();

        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("hello", "hello"));
        assert!(!constant_time_compare("hello", "world"));
        assert!(!constant_time_compare("hello", "hello_world"));
    }

    #[test]
    fn test_tokens_match() {
        assert!(tokens_match("abc123", Some("abc123")));
        assert!(!tokens_match("abc123", Some("abc124")));
        assert!(!tokens_match("abc123", None));
        // A cleared stored token must not match an empty candidate either
        assert!(!tokens_match("", None));
    }

    #[test]
    fn test_expiration() {
        let future = create_expiration(10);
        assert!(!is_expired(future));

        let past = Utc::now() - Duration::minutes(1);
        assert!(is_expired(past));
    }

    #[test]
    fn test_generate_expiring_token() {
        let (token, expires_at) = generate_expiring_token(30);
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(expires_at > Utc::now());
        assert!(expires_at <= Utc::now() + Duration::minutes(30));
    }
}
