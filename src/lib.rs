//! Account Service Library
//!
//! A user-account subsystem providing registration, email verification,
//! login with lockout protection, password reset, profile self-service, and
//! role-gated administration. Designed as a library with an HTTP layer on
//! top of a single service object.
//!
//! # Features
//!
//! - **Token lifecycle**: opaque, time-bounded, single-use verification and
//!   password-reset tokens
//! - **Lockout protection**: atomic failed-attempt counting with a
//!   configurable threshold
//! - **Role-based access**: closed role enumeration with case-insensitive
//!   normalization at the boundary
//! - **Password security**: bcrypt hashing with configurable cost
//! - **Templated email**: verification, reset, lockout, and upgrade
//!   notifications over SMTP
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use account_service::{AccountService, RegisterRequest};
//! use sqlx::PgPool;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = PgPool::connect("postgres://localhost/accounts").await?;
//!     let account_service = AccountService::new(pool);
//!
//!     let request = RegisterRequest {
//!         email: "alice@example.com".to_string(),
//!         password: "SecurePass123!".to_string(),
//!         nickname: None,
//!         first_name: Some("Alice".to_string()),
//!         last_name: None,
//!     };
//!
//!     let account = account_service.register(request).await?;
//!     println!("Created account {} ({})", account.nickname, account.email);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **API Layer**: HTTP handlers, auth middleware, configurable routing
//! - **Service Layer**: the account state machine, email, and JWT services
//! - **Models**: account entity, role enumeration, request/response types
//! - **Database**: connection pooling and pagination
//! - **Utils**: security primitives, validation, access policy, errors

/// HTTP API layer with handlers and configurable routing
pub mod api;

/// Configuration management for all service settings
pub mod config;

/// Database connection management and configuration
pub mod database;

/// Data models and request/response structures
pub mod models;

/// Business logic: account state machine, email, and tokens
pub mod service;

/// Shared utilities for security, validation, access policy, and errors
pub mod utils;

// Re-export commonly used types for convenient access
pub use api::{create_routes, AppState, RouterBuilder};
pub use config::{AppConfig, AuthConfig, EmailConfig, JwtConfig, ServerConfig};
pub use database::{DatabaseConfig, DatabasePool, Pagination};
pub use models::{
    account::{Account, Role},
    auth::{AccessTokenClaims, CallerClaims},
    requests::{
        CreateAccountRequest, ForgotPasswordRequest, LoginRequest, ProfessionalStatusRequest,
        RegisterRequest, ResetPasswordRequest, UpdateAccountRequest, UpdateProfileRequest,
    },
};
pub use service::{
    AccountService, AccountServiceError, EmailService, JwtService, NotificationKind,
};
pub use utils::error::{AppError, AppResult, ErrorResponse};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
