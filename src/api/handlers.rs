//! HTTP Request Handlers
//!
//! Thin axum handlers that validate payloads, enforce the access policy, and
//! drive the account state machine. Token-lifecycle endpoints map internal
//! detail onto deliberately generic external responses.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::middleware::{require_role, AuthUser},
    database::Pagination,
    models::{
        account::{Account, Role},
        requests::*,
    },
    service::{AccountService, AccountServiceError, JwtService},
    utils::error::{AppError, AppResult},
    VERSION,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub jwt_service: Arc<JwtService>,
}

/// Query parameters for the account listing endpoint
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

/// Self-service registration
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<Json<Account>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(format!("Invalid account data: {}", e)))?;

    let account = state.account_service.register(request).await?;
    Ok(Json(account))
}

/// Email verification via the emailed link.
///
/// A missing account and a bad token produce different status codes but the
/// messages stay generic; the stored token is never echoed back.
pub async fn verify_email(
    State(state): State<AppState>,
    Path((account_id, token)): Path<(Uuid, String)>,
) -> AppResult<Json<MessageResponse>> {
    match state.account_service.verify_email(account_id, &token).await {
        Ok(_) => Ok(Json(MessageResponse::new(
            "Email verified successfully! Your account has been activated.",
        ))),
        Err(AccountServiceError::NotFound) => Err(AppError::NotFound(
            "Account not found. The verification link may be invalid or the account has been deleted."
                .to_string(),
        )),
        Err(AccountServiceError::InvalidToken) => Err(AppError::BadRequest(
            "Invalid verification token. The link may be expired or has already been used."
                .to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

/// Login with email and password, returning an access token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(format!("Invalid login data: {}", e)))?;

    let account = state
        .account_service
        .login(&request.email, &request.password)
        .await?;

    let access_token = state
        .jwt_service
        .create_access_token(&account.email, account.role)
        .map_err(|e| AppError::Internal(format!("Failed to issue access token: {}", e)))?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
        expires_in: state.jwt_service.expires_in_seconds(),
    }))
}

/// Request a password reset email.
///
/// Known and unknown emails produce the identical response so accounts
/// cannot be enumerated from this endpoint.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(request): Json<ForgotPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(format!("Invalid request: {}", e)))?;

    state
        .account_service
        .request_password_reset(&request.email)
        .await?;

    Ok(Json(MessageResponse::new(
        "If the email address is registered, password reset instructions have been sent.",
    )))
}

/// Pre-check a reset token before showing the reset form
pub async fn check_reset_token(
    State(state): State<AppState>,
    Path((account_id, token)): Path<(Uuid, String)>,
) -> AppResult<Json<ResetTokenCheckResponse>> {
    let valid = state
        .account_service
        .verify_reset_token(account_id, &token)
        .await?;

    if !valid {
        return Err(AppError::BadRequest(
            "Invalid or expired password reset token".to_string(),
        ));
    }

    Ok(Json(ResetTokenCheckResponse {
        message: "Token is valid. Submit a new password to complete the reset.".to_string(),
        account_id,
        token,
    }))
}

/// Consume a reset token and set a new password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(format!("Invalid request: {}", e)))?;

    let success = state
        .account_service
        .reset_password(request.account_id, &request.token, &request.new_password)
        .await?;

    if success {
        Ok(Json(MessageResponse::new("Password reset successful.")))
    } else {
        Err(AppError::BadRequest(
            "Failed to reset password. The token may be invalid or expired.".to_string(),
        ))
    }
}

/// Update the authenticated caller's own profile.
///
/// Access is identity-based, not role-based: the target is whoever the
/// claim's subject resolves to.
pub async fn update_own_profile(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Json(request): Json<UpdateProfileRequest>,
) -> AppResult<Json<Account>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(format!("Invalid profile data: {}", e)))?;

    let account = resolve_caller_account(&state.account_service, &caller.subject).await?;
    let updated = state
        .account_service
        .update_profile(account.id, request)
        .await?;

    Ok(Json(updated))
}

/// List accounts with pagination (admin/manager)
pub async fn list_accounts(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<AccountListResponse>> {
    require_role(&caller, &[Role::Admin, Role::Manager])?;

    let pagination = Pagination::from_query(query.skip, query.limit);
    let total = state.account_service.count_accounts().await?;
    let items = state.account_service.list_accounts(&pagination).await?;

    Ok(Json(AccountListResponse {
        page: pagination.page(),
        size: items.len(),
        items,
        total,
    }))
}

/// Create an account with an explicit role (admin/manager)
pub async fn create_account(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Json(request): Json<CreateAccountRequest>,
) -> AppResult<Json<Account>> {
    require_role(&caller, &[Role::Admin, Role::Manager])?;

    request
        .validate()
        .map_err(|e| AppError::Validation(format!("Invalid account data: {}", e)))?;

    let account = state.account_service.create_account(request).await?;
    Ok(Json(account))
}

/// Fetch an account by id (admin/manager)
pub async fn get_account(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(account_id): Path<Uuid>,
) -> AppResult<Json<Account>> {
    require_role(&caller, &[Role::Admin, Role::Manager])?;

    let account = state.account_service.get_by_id(account_id).await?;
    Ok(Json(account))
}

/// Update any account, including email and role (admin/manager)
pub async fn update_account(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(account_id): Path<Uuid>,
    Json(request): Json<UpdateAccountRequest>,
) -> AppResult<Json<Account>> {
    require_role(&caller, &[Role::Admin, Role::Manager])?;

    request
        .validate()
        .map_err(|e| AppError::Validation(format!("Invalid update data: {}", e)))?;

    let account = state
        .account_service
        .update_account(account_id, request)
        .await?;
    Ok(Json(account))
}

/// Delete an account (admin/manager)
pub async fn delete_account(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(account_id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    require_role(&caller, &[Role::Admin, Role::Manager])?;

    state.account_service.delete_account(account_id).await?;
    Ok(Json(MessageResponse::new("Account deleted.")))
}

/// Update an account's professional status (admin/manager)
pub async fn update_professional_status(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(account_id): Path<Uuid>,
    Json(request): Json<ProfessionalStatusRequest>,
) -> AppResult<Json<Account>> {
    require_role(&caller, &[Role::Admin, Role::Manager])?;

    let account = state
        .account_service
        .update_professional_status(account_id, request.is_professional)
        .await?;
    Ok(Json(account))
}

/// Unlock an account locked out by failed logins (admin/manager)
pub async fn unlock_account(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(account_id): Path<Uuid>,
) -> AppResult<Json<Account>> {
    require_role(&caller, &[Role::Admin, Role::Manager])?;

    let account = state.account_service.unlock_account(account_id).await?;
    Ok(Json(account))
}

/// Health check endpoint
pub async fn health_check(
    State(state): State<AppState>,
) -> AppResult<Json<HealthCheckResponse>> {
    state.account_service.health_check().await?;

    Ok(Json(HealthCheckResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: VERSION.to_string(),
    }))
}

/// Resolve a caller claim subject (account id or email) to its account
async fn resolve_caller_account(
    account_service: &AccountService,
    subject: &str,
) -> AppResult<Account> {
    let account = if subject.contains('@') {
        account_service.get_by_email(subject).await?
    } else {
        let account_id = Uuid::parse_str(subject)
            .map_err(|_| AppError::Authentication("Invalid token subject".to_string()))?;
        account_service.get_by_id(account_id).await?
    };
    Ok(account)
}
