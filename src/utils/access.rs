//! Access Control Policy
//!
//! Maps a caller's asserted role string onto the closed [`Role`] enum and
//! decides whether an operation is permitted. Role strings arrive from an
//! upstream authentication layer and may use any casing; anything that does
//! not normalize to a known role is unauthorized.

use crate::models::account::Role;

/// Check whether a caller's role claim grants one of the required roles.
///
/// The claim is normalized case-insensitively before membership is tested,
/// so "admin", "Admin", and "ADMIN" are equivalent. Unknown or empty role
/// strings never authorize anything.
pub fn authorize(caller_role: &str, required_roles: &[Role]) -> bool {
    match caller_role.parse::<Role>() {
        Ok(role) => required_roles.contains(&role),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_case_insensitive() {
        assert!(authorize("admin", &[Role::Admin]));
        assert!(authorize("Admin", &[Role::Admin]));
        assert!(authorize("ADMIN", &[Role::Admin]));
    }

    #[test]
    fn test_authorize_role_list() {
        assert!(authorize("MANAGER", &[Role::Admin, Role::Manager]));
        assert!(authorize("manager", &[Role::Admin, Role::Manager]));
        assert!(!authorize("AUTHENTICATED", &[Role::Admin, Role::Manager]));
    }

    #[test]
    fn test_authorize_fails_closed() {
        assert!(!authorize("user", &[Role::Admin]));
        assert!(!authorize("", &[Role::Admin]));
        assert!(!authorize("superadmin", &[Role::Admin]));
        assert!(!authorize("*", &[Role::Admin]));
    }

    #[test]
    fn test_authorize_empty_required_set() {
        assert!(!authorize("ADMIN", &[]));
    }
}
