//! Service Layer
//!
//! Business logic: the account state machine, outbound email, and access
//! tokens.

pub mod account;
pub mod email_service;
pub mod jwt;

// Re-export services
pub use account::{AccountService, AccountServiceError, AccountServiceResult};
pub use email_service::{EmailService, NotificationKind};
pub use jwt::{JwtError, JwtService};
