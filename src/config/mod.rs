//! Configuration Module
//!
//! Explicit configuration structs for the account service. Everything is
//! assembled from environment variables once, at startup, and passed into
//! constructors; there is no ambient global settings object.

use crate::utils::security::DEFAULT_BCRYPT_COST;

/// Environment variable helpers
pub mod env {
    use std::env;

    /// Get environment variable as string with default
    pub fn get_string(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get environment variable as boolean with default
    pub fn get_bool(key: &str, default: bool) -> bool {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u16 with default
    pub fn get_u16(key: &str, default: u16) -> u16 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u32 with default
    pub fn get_u32(key: &str, default: u32) -> u32 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as i32 with default
    pub fn get_i32(key: &str, default: i32) -> i32 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as i64 with default
    pub fn get_i64(key: &str, default: i64) -> i64 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u64 with default
    pub fn get_u64(key: &str, default: u64) -> u64 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Check if environment variable is set
    pub fn is_set(key: &str) -> bool {
        env::var(key).is_ok()
    }

    /// Get required environment variable or panic
    pub fn get_required(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Required environment variable {} is not set", key))
    }
}

/// Application configuration combining all service configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: crate::database::DatabaseConfig,
    pub auth: AuthConfig,
    pub jwt: JwtConfig,
    /// Email configuration; absent when SMTP is not configured
    pub email: Option<EmailConfig>,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

/// Account state-machine policy knobs
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,

    /// Consecutive failed logins before the account is locked
    pub max_login_attempts: i32,

    /// Lifetime of a password reset token, in minutes
    pub reset_token_ttl_minutes: i64,

    /// When true, unverified accounts are rejected at login
    pub require_verified_login: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            max_login_attempts: 5,
            reset_token_ttl_minutes: 60,
            require_verified_login: true,
        }
    }
}

impl AuthConfig {
    /// Build auth policy from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bcrypt_cost: env::get_u32("AUTH_BCRYPT_COST", defaults.bcrypt_cost),
            max_login_attempts: env::get_i32("AUTH_MAX_LOGIN_ATTEMPTS", defaults.max_login_attempts),
            reset_token_ttl_minutes: env::get_i64(
                "AUTH_RESET_TOKEN_TTL_MINUTES",
                defaults.reset_token_ttl_minutes,
            ),
            require_verified_login: env::get_bool(
                "AUTH_REQUIRE_VERIFIED_LOGIN",
                defaults.require_verified_login,
            ),
        }
    }
}

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_minutes: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::get_required("JWT_SECRET"),
            expires_minutes: env::get_i64("JWT_EXPIRES_MINUTES", 60),
        }
    }
}

/// Email service configuration
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname
    pub smtp_host: String,
    /// SMTP server port
    pub smtp_port: u16,
    /// SMTP username
    pub smtp_username: String,
    /// SMTP password
    pub smtp_password: String,
    /// From email address
    pub from_email: String,
    /// From name (display name)
    pub from_name: String,
    /// Base URL used to build verification and reset links
    pub app_base_url: String,
}

impl EmailConfig {
    /// Create email configuration from environment variables.
    ///
    /// Returns None when SMTP_HOST is unset, which disables outbound email.
    pub fn from_env() -> Option<Self> {
        if !env::is_set("SMTP_HOST") {
            return None;
        }

        Some(Self {
            smtp_host: env::get_required("SMTP_HOST"),
            smtp_port: env::get_u16("SMTP_PORT", 587),
            smtp_username: env::get_required("SMTP_USERNAME"),
            smtp_password: env::get_required("SMTP_PASSWORD"),
            from_email: env::get_required("FROM_EMAIL"),
            from_name: env::get_string("FROM_NAME", "Account Service"),
            app_base_url: env::get_string("APP_BASE_URL", "http://localhost:3000"),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: env::get_string("SERVER_HOST", "0.0.0.0"),
            port: env::get_u16("SERVER_PORT", 3000),
            log_level: env::get_string("LOG_LEVEL", "info"),
        }
    }
}

impl AppConfig {
    /// Load complete application configuration from environment
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            server: ServerConfig::default(),
            database: crate::database::DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env(),
            jwt: JwtConfig::from_env(),
            email: EmailConfig::from_env(),
        })
    }

    /// Validate the complete configuration
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".into());
        }

        if self.database.max_connections == 0 {
            return Err("Database max_connections must be greater than 0".into());
        }

        if self.database.min_connections > self.database.max_connections {
            return Err("Database min_connections cannot be greater than max_connections".into());
        }

        if self.jwt.secret.is_empty() {
            return Err("JWT secret cannot be empty".into());
        }

        if self.auth.max_login_attempts < 1 {
            return Err("max_login_attempts must be at least 1".into());
        }

        if self.auth.reset_token_ttl_minutes < 1 {
            return Err("reset_token_ttl_minutes must be at least 1".into());
        }

        Ok(())
    }
}
