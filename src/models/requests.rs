//! Request and Response Models
//!
//! Data structures for API request and response payloads with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::account::{Account, Role};
use crate::utils::validation::{email_validator, name_validator, nickname_validator, url_validator};

/// Request payload for self-service registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address (must be unique and valid format)
    #[validate(custom(function = "email_validator"))]
    pub email: String,

    /// Password (8-128 characters with strength requirements)
    #[validate(length(
        min = 8,
        max = 128,
        message = "Password must be between 8 and 128 characters"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    /// Optional display handle; generated when absent
    #[validate(custom(function = "nickname_validator"))]
    pub nickname: Option<String>,

    #[validate(custom(function = "name_validator"))]
    pub first_name: Option<String>,

    #[validate(custom(function = "name_validator"))]
    pub last_name: Option<String>,
}

/// Request payload for admin/manager-driven account creation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAccountRequest {
    #[validate(custom(function = "email_validator"))]
    pub email: String,

    #[validate(length(
        min = 8,
        max = 128,
        message = "Password must be between 8 and 128 characters"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    #[validate(custom(function = "nickname_validator"))]
    pub nickname: Option<String>,

    /// Explicit role; defaults to the registration rules when absent
    pub role: Option<Role>,

    #[validate(custom(function = "name_validator"))]
    pub first_name: Option<String>,

    #[validate(custom(function = "name_validator"))]
    pub last_name: Option<String>,

    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,

    #[validate(custom(function = "url_validator"))]
    pub profile_picture_url: Option<String>,

    #[validate(custom(function = "url_validator"))]
    pub github_profile_url: Option<String>,

    #[validate(custom(function = "url_validator"))]
    pub linkedin_profile_url: Option<String>,
}

impl From<RegisterRequest> for CreateAccountRequest {
    fn from(request: RegisterRequest) -> Self {
        CreateAccountRequest {
            email: request.email,
            password: request.password,
            nickname: request.nickname,
            role: None,
            first_name: request.first_name,
            last_name: request.last_name,
            bio: None,
            profile_picture_url: None,
            github_profile_url: None,
            linkedin_profile_url: None,
        }
    }
}

/// Request payload for login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "email_validator"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

/// Request payload for self-service profile updates.
///
/// Only display fields are accepted. Unknown keys in the payload, including
/// any attempt to set `role` or `email` from this entry point, are silently
/// dropped during deserialization rather than rejected.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(custom(function = "nickname_validator"))]
    pub nickname: Option<String>,

    #[validate(custom(function = "name_validator"))]
    pub first_name: Option<String>,

    #[validate(custom(function = "name_validator"))]
    pub last_name: Option<String>,

    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,

    #[validate(custom(function = "url_validator"))]
    pub profile_picture_url: Option<String>,

    #[validate(custom(function = "url_validator"))]
    pub github_profile_url: Option<String>,

    #[validate(custom(function = "url_validator"))]
    pub linkedin_profile_url: Option<String>,
}

/// Request payload for admin/manager account updates; may also change email
/// and role
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[validate(custom(function = "email_validator"))]
    pub email: Option<String>,

    #[validate(custom(function = "nickname_validator"))]
    pub nickname: Option<String>,

    #[validate(custom(function = "name_validator"))]
    pub first_name: Option<String>,

    #[validate(custom(function = "name_validator"))]
    pub last_name: Option<String>,

    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,

    #[validate(custom(function = "url_validator"))]
    pub profile_picture_url: Option<String>,

    #[validate(custom(function = "url_validator"))]
    pub github_profile_url: Option<String>,

    #[validate(custom(function = "url_validator"))]
    pub linkedin_profile_url: Option<String>,

    pub role: Option<Role>,
}

/// Request payload for requesting a password reset email
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(custom(function = "email_validator"))]
    pub email: String,
}

/// Request payload for consuming a password reset token
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    pub account_id: Uuid,

    #[validate(length(min = 1, message = "Token cannot be empty"))]
    pub token: String,

    #[validate(length(
        min = 8,
        max = 128,
        message = "Password must be between 8 and 128 characters"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub new_password: String,
}

/// Request payload for professional-status updates
#[derive(Debug, Clone, Deserialize)]
pub struct ProfessionalStatusRequest {
    pub is_professional: bool,
}

/// Response for successful login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Generic message response for flows that reveal no account detail
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Response for the reset-password form pre-check
#[derive(Debug, Serialize)]
pub struct ResetTokenCheckResponse {
    pub message: String,
    pub account_id: Uuid,
    pub token: String,
}

/// Paginated account listing
#[derive(Debug, Serialize)]
pub struct AccountListResponse {
    pub items: Vec<Account>,
    pub total: i64,
    pub page: i64,
    pub size: usize,
}

/// Response for health check
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

/// Validates password strength according to security requirements
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(ValidationError::new(
            "Password must contain at least one lowercase letter",
        ));
    }

    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(ValidationError::new(
            "Password must contain at least one uppercase letter",
        ));
    }

    if !password.chars().any(|c| c.is_numeric()) {
        return Err(ValidationError::new(
            "Password must contain at least one digit",
        ));
    }

    if !password.chars().any(|c| !c.is_alphanumeric()) {
        return Err(ValidationError::new(
            "Password must contain at least one special character",
        ));
    }

    Ok(())
}
