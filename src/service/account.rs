//! Account Service
//!
//! The account state machine: registration, email verification, login with
//! lockout, password reset, profile updates, professional status, and
//! administrative CRUD. Every transition is a single atomic read-modify-write
//! against the account row; where concurrent callers can race (token
//! consumption, lockout counting) the precondition is re-checked inside the
//! UPDATE statement itself.

use chrono::Utc;
use log::{debug, error, info, warn};
use sqlx::PgPool;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use crate::config::AuthConfig;
use crate::database::Pagination;
use crate::models::{
    account::{Account, AccountRow, Role},
    requests::{
        CreateAccountRequest, RegisterRequest, UpdateAccountRequest, UpdateProfileRequest,
    },
};
use crate::service::EmailService;
use crate::utils::{
    error::AppError,
    nickname::generate_nickname,
    security::{
        generate_expiring_token, generate_token, hash_password_with_cost, tokens_match,
        verify_password,
    },
    validation::normalize_email,
};

/// Column list shared by every query that materializes an [`AccountRow`]
const ACCOUNT_COLUMNS: &str = "id, email, nickname, first_name, last_name, bio, \
     profile_picture_url, github_profile_url, linkedin_profile_url, role, password_hash, \
     email_verified, verification_token, failed_login_attempts, is_locked, \
     password_reset_token, password_reset_expires_at, is_professional, \
     professional_status_updated_at, last_login_at, created_at, updated_at";

/// Custom error types for the account service
#[derive(Error, Debug)]
pub enum AccountServiceError {
    /// Account with the specified identifier was not found
    #[error("Account not found")]
    NotFound,

    /// Attempted to create an account with an email that already exists
    #[error("Email already exists")]
    DuplicateEmail,

    /// Attempted to claim a nickname that already exists
    #[error("Nickname already exists")]
    DuplicateNickname,

    /// Verification or reset token missing, mismatched, or already consumed
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Invalid login credentials provided
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Login rejected before password comparison because the account is locked
    #[error("Account locked due to too many failed login attempts")]
    AccountLocked,

    /// Input validation failed with detailed error message
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required notification could not be delivered
    #[error("Email delivery error: {0}")]
    EmailDelivery(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing operation failed
    #[error("Password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

impl From<AccountServiceError> for AppError {
    fn from(err: AccountServiceError) -> Self {
        match err {
            AccountServiceError::NotFound => AppError::NotFound("Account not found".to_string()),
            AccountServiceError::DuplicateEmail => {
                AppError::Conflict("Email already exists".to_string())
            }
            AccountServiceError::DuplicateNickname => {
                AppError::Conflict("Nickname already exists".to_string())
            }
            AccountServiceError::InvalidToken => {
                AppError::BadRequest("Invalid or expired token".to_string())
            }
            AccountServiceError::InvalidCredentials => {
                AppError::Authentication("Incorrect email or password".to_string())
            }
            AccountServiceError::AccountLocked => AppError::Locked(
                "Account locked due to too many failed login attempts".to_string(),
            ),
            AccountServiceError::Validation(msg) => AppError::Validation(msg),
            AccountServiceError::EmailDelivery(msg) => AppError::ExternalService(msg),
            AccountServiceError::Database(e) => AppError::Database(e),
            AccountServiceError::Hashing(e) => AppError::Hashing(e),
        }
    }
}

/// Result type for account service operations
pub type AccountServiceResult<T> = Result<T, AccountServiceError>;

/// Core account service implementing the account state machine
#[derive(Clone)]
pub struct AccountService {
    /// Database connection pool for efficient connection management
    db_pool: PgPool,

    /// Lockout, token-lifetime, and hashing policy
    auth: AuthConfig,

    /// Email service for lifecycle notifications
    email_service: Option<Arc<EmailService>>,
}

impl AccountService {
    /// Creates a new AccountService with default policy and no outbound email
    pub fn new(db_pool: PgPool) -> Self {
        Self {
            db_pool,
            auth: AuthConfig::default(),
            email_service: None,
        }
    }

    /// Creates a new AccountService with an email service attached
    pub fn with_email_service(db_pool: PgPool, email_service: Arc<EmailService>) -> Self {
        Self {
            db_pool,
            auth: AuthConfig::default(),
            email_service: Some(email_service),
        }
    }

    /// Creates a new AccountService with explicit policy configuration
    pub fn with_config(
        db_pool: PgPool,
        auth: AuthConfig,
        email_service: Option<Arc<EmailService>>,
    ) -> Self {
        Self {
            db_pool,
            auth,
            email_service,
        }
    }

    // ------------------------------------------------------------------
    // Registration and email verification
    // ------------------------------------------------------------------

    /// Self-service registration.
    ///
    /// The very first account ever registered becomes ADMIN and is considered
    /// verified; everyone else starts as ANONYMOUS with a pending
    /// verification token.
    pub async fn register(&self, request: RegisterRequest) -> AccountServiceResult<Account> {
        request
            .validate()
            .map_err(|e| AccountServiceError::Validation(format!("Invalid account data: {}", e)))?;

        self.create_account(request.into()).await
    }

    /// Create an account, optionally with an explicit role (admin-driven).
    ///
    /// Accounts created directly as ADMIN skip email verification; all others
    /// receive a verification email. A delivery failure propagates so the
    /// caller can report that account setup is incomplete.
    pub async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> AccountServiceResult<Account> {
        request
            .validate()
            .map_err(|e| AccountServiceError::Validation(format!("Invalid account data: {}", e)))?;

        let normalized_email = normalize_email(&request.email);
        let password_hash = hash_password_with_cost(&request.password, self.auth.bcrypt_cost)?;

        let nickname = match request.nickname {
            Some(nickname) => nickname,
            None => self.unique_nickname().await?,
        };

        let role = match request.role {
            Some(role) => role,
            None if self.count_accounts().await? == 0 => Role::Admin,
            None => Role::Anonymous,
        };
        let email_verified = role == Role::Admin;
        let verification_token = if email_verified {
            None
        } else {
            Some(generate_token())
        };

        let sql = format!(
            "INSERT INTO accounts (email, nickname, first_name, last_name, bio, \
             profile_picture_url, github_profile_url, linkedin_profile_url, role, \
             password_hash, email_verified, verification_token) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {ACCOUNT_COLUMNS}"
        );

        // The unique index on email is the authoritative duplicate guard; a
        // racing register resolves here, not in a prior existence check.
        let row: AccountRow = sqlx::query_as(&sql)
            .bind(&normalized_email)
            .bind(&nickname)
            .bind(&request.first_name)
            .bind(&request.last_name)
            .bind(&request.bio)
            .bind(&request.profile_picture_url)
            .bind(&request.github_profile_url)
            .bind(&request.linkedin_profile_url)
            .bind(role)
            .bind(&password_hash)
            .bind(email_verified)
            .bind(&verification_token)
            .fetch_one(&self.db_pool)
            .await
            .map_err(Self::map_database_error)?;

        if let (Some(token), Some(email_service)) = (&row.verification_token, &self.email_service)
        {
            email_service
                .send_verification_email(&row.email, row.display_name(), row.id, token)
                .await
                .map_err(|e| AccountServiceError::EmailDelivery(e.to_string()))?;
        }

        info!("Created account {} with role {}", row.id, row.role);
        Ok(row.into())
    }

    /// Consume a verification token, marking the account verified.
    ///
    /// Consuming the token clears it and promotes ANONYMOUS accounts to
    /// AUTHENTICATED in the same statement. A second call with the already
    /// consumed token fails: the token is single-use.
    pub async fn verify_email(
        &self,
        account_id: Uuid,
        token: &str,
    ) -> AccountServiceResult<Account> {
        let row = self
            .fetch_row(account_id)
            .await?
            .ok_or(AccountServiceError::NotFound)?;

        if !tokens_match(token, row.verification_token.as_deref()) {
            debug!("Verification token mismatch for account {}", account_id);
            return Err(AccountServiceError::InvalidToken);
        }

        let sql = format!(
            "UPDATE accounts \
             SET email_verified = TRUE, \
                 verification_token = NULL, \
                 role = CASE WHEN role = 'ANONYMOUS'::account_role \
                             THEN 'AUTHENTICATED'::account_role ELSE role END, \
                 updated_at = NOW() \
             WHERE id = $1 AND verification_token = $2 AND email_verified = FALSE \
             RETURNING {ACCOUNT_COLUMNS}"
        );

        // The WHERE clause re-checks the token: of two concurrent consumers,
        // the loser sees zero rows and fails like any stale token would.
        let updated: Option<AccountRow> = sqlx::query_as(&sql)
            .bind(account_id)
            .bind(token)
            .fetch_optional(&self.db_pool)
            .await?;

        match updated {
            Some(row) => {
                info!("Account {} verified its email", row.id);
                Ok(row.into())
            }
            None => Err(AccountServiceError::InvalidToken),
        }
    }

    // ------------------------------------------------------------------
    // Login and lockout
    // ------------------------------------------------------------------

    /// Authenticate by email and password.
    ///
    /// A locked account is rejected before any password comparison. Failed
    /// attempts are counted atomically and the account locks at the
    /// configured threshold. Successful login resets the counter and stamps
    /// `last_login_at`.
    pub async fn login(&self, email: &str, password: &str) -> AccountServiceResult<Account> {
        let normalized_email = normalize_email(email);
        let row = self
            .fetch_row_by_email(&normalized_email)
            .await?
            .ok_or(AccountServiceError::InvalidCredentials)?;

        if row.is_locked {
            return Err(AccountServiceError::AccountLocked);
        }

        if !verify_password(password, &row.password_hash)? {
            self.record_failed_login(&row).await?;
            return Err(AccountServiceError::InvalidCredentials);
        }

        if self.auth.require_verified_login && !row.email_verified {
            debug!("Rejecting login for unverified account {}", row.id);
            return Err(AccountServiceError::InvalidCredentials);
        }

        let sql = format!(
            "UPDATE accounts \
             SET failed_login_attempts = 0, last_login_at = NOW(), updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {ACCOUNT_COLUMNS}"
        );
        let row: AccountRow = sqlx::query_as(&sql)
            .bind(row.id)
            .fetch_one(&self.db_pool)
            .await?;

        info!("Account {} logged in", row.id);
        Ok(row.into())
    }

    /// Whether the account behind this email is currently locked.
    ///
    /// Unknown emails report false so the check leaks nothing.
    pub async fn is_account_locked(&self, email: &str) -> AccountServiceResult<bool> {
        let normalized_email = normalize_email(email);
        let row = self.fetch_row_by_email(&normalized_email).await?;
        Ok(row.map(|r| r.is_locked).unwrap_or(false))
    }

    /// Clear the lock flag and failed-attempt counter (admin operation)
    pub async fn unlock_account(&self, account_id: Uuid) -> AccountServiceResult<Account> {
        let sql = format!(
            "UPDATE accounts \
             SET is_locked = FALSE, failed_login_attempts = 0, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {ACCOUNT_COLUMNS}"
        );
        let row: Option<AccountRow> = sqlx::query_as(&sql)
            .bind(account_id)
            .fetch_optional(&self.db_pool)
            .await?;

        match row {
            Some(row) => {
                info!("Account {} unlocked", row.id);
                Ok(row.into())
            }
            None => Err(AccountServiceError::NotFound),
        }
    }

    /// Count a failed attempt and lock the account at the threshold.
    ///
    /// Increment and lock decision happen in one statement so concurrent
    /// failures cannot interleave partial writes.
    async fn record_failed_login(&self, row: &AccountRow) -> AccountServiceResult<()> {
        let locked_now: bool = sqlx::query_scalar(
            "UPDATE accounts \
             SET failed_login_attempts = failed_login_attempts + 1, \
                 is_locked = is_locked OR failed_login_attempts + 1 >= $2, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING is_locked",
        )
        .bind(row.id)
        .bind(self.auth.max_login_attempts)
        .fetch_one(&self.db_pool)
        .await?;

        if locked_now && !row.is_locked {
            warn!(
                "Account {} locked after too many failed login attempts",
                row.id
            );
            // Best-effort notice; the lock stands whether or not it sends
            if let Some(email_service) = &self.email_service {
                if let Err(e) = email_service
                    .send_account_locked_email(&row.email, row.display_name())
                    .await
                {
                    error!("Failed to send account_locked email for {}: {}", row.id, e);
                }
            }
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Password reset
    // ------------------------------------------------------------------

    /// Issue a password-reset token and email it to the account.
    ///
    /// Returns None for unknown emails; callers must present the same
    /// external outcome either way so existing accounts cannot be enumerated.
    /// A fresh request overwrites any earlier token.
    pub async fn request_password_reset(
        &self,
        email: &str,
    ) -> AccountServiceResult<Option<Account>> {
        let normalized_email = normalize_email(email);
        let Some(row) = self.fetch_row_by_email(&normalized_email).await? else {
            debug!("Password reset requested for unknown email");
            return Ok(None);
        };

        let (token, expires_at) = generate_expiring_token(self.auth.reset_token_ttl_minutes);

        let sql = format!(
            "UPDATE accounts \
             SET password_reset_token = $2, password_reset_expires_at = $3, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {ACCOUNT_COLUMNS}"
        );
        let row: AccountRow = sqlx::query_as(&sql)
            .bind(row.id)
            .bind(&token)
            .bind(expires_at)
            .fetch_one(&self.db_pool)
            .await?;

        if let Some(email_service) = &self.email_service {
            let minutes_remaining = (expires_at - Utc::now()).num_minutes();
            email_service
                .send_password_reset_email(
                    &row.email,
                    row.display_name(),
                    row.id,
                    &token,
                    minutes_remaining,
                )
                .await
                .map_err(|e| AccountServiceError::EmailDelivery(e.to_string()))?;
        }

        info!("Issued password reset token for account {}", row.id);
        Ok(Some(row.into()))
    }

    /// Check a reset token without consuming it.
    ///
    /// False for unknown accounts, absent tokens, mismatches, and expired
    /// tokens alike.
    pub async fn verify_reset_token(
        &self,
        account_id: Uuid,
        token: &str,
    ) -> AccountServiceResult<bool> {
        let row = self.fetch_row(account_id).await?;
        Ok(row.map(|r| r.reset_token_is_valid(token)).unwrap_or(false))
    }

    /// Consume a reset token and replace the credential.
    ///
    /// Token check, credential replacement, and token clearing are one
    /// conditional UPDATE: of two concurrent calls racing on the same token,
    /// at most one succeeds and the loser observes the token already gone.
    /// Resetting the password also unlocks the account.
    pub async fn reset_password(
        &self,
        account_id: Uuid,
        token: &str,
        new_password: &str,
    ) -> AccountServiceResult<bool> {
        let password_hash = hash_password_with_cost(new_password, self.auth.bcrypt_cost)?;

        let result = sqlx::query(
            "UPDATE accounts \
             SET password_hash = $3, \
                 password_reset_token = NULL, \
                 password_reset_expires_at = NULL, \
                 failed_login_attempts = 0, \
                 is_locked = FALSE, \
                 updated_at = NOW() \
             WHERE id = $1 \
               AND password_reset_token = $2 \
               AND password_reset_expires_at IS NOT NULL \
               AND password_reset_expires_at > NOW()",
        )
        .bind(account_id)
        .bind(token)
        .execute(&self.db_pool)
        .await?;

        if result.rows_affected() == 1 {
            info!("Password reset completed for account {}", account_id);
            Ok(true)
        } else {
            debug!("Password reset rejected for account {}", account_id);
            Ok(false)
        }
    }

    // ------------------------------------------------------------------
    // Profile and administrative updates
    // ------------------------------------------------------------------

    /// Self-service profile update; only display fields are touched.
    ///
    /// Role and email never pass through here: the request type has no such
    /// fields and unknown payload keys are dropped at deserialization.
    pub async fn update_profile(
        &self,
        account_id: Uuid,
        request: UpdateProfileRequest,
    ) -> AccountServiceResult<Account> {
        request
            .validate()
            .map_err(|e| AccountServiceError::Validation(format!("Invalid profile data: {}", e)))?;

        let sql = format!(
            "UPDATE accounts SET \
                 nickname = COALESCE($2, nickname), \
                 first_name = COALESCE($3, first_name), \
                 last_name = COALESCE($4, last_name), \
                 bio = COALESCE($5, bio), \
                 profile_picture_url = COALESCE($6, profile_picture_url), \
                 github_profile_url = COALESCE($7, github_profile_url), \
                 linkedin_profile_url = COALESCE($8, linkedin_profile_url), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {ACCOUNT_COLUMNS}"
        );

        let row: Option<AccountRow> = sqlx::query_as(&sql)
            .bind(account_id)
            .bind(&request.nickname)
            .bind(&request.first_name)
            .bind(&request.last_name)
            .bind(&request.bio)
            .bind(&request.profile_picture_url)
            .bind(&request.github_profile_url)
            .bind(&request.linkedin_profile_url)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(Self::map_database_error)?;

        row.map(Account::from).ok_or(AccountServiceError::NotFound)
    }

    /// Admin/manager account update; may also change email and role
    pub async fn update_account(
        &self,
        account_id: Uuid,
        request: UpdateAccountRequest,
    ) -> AccountServiceResult<Account> {
        request
            .validate()
            .map_err(|e| AccountServiceError::Validation(format!("Invalid update data: {}", e)))?;

        let normalized_email = request.email.as_deref().map(normalize_email);

        let sql = format!(
            "UPDATE accounts SET \
                 email = COALESCE($2, email), \
                 nickname = COALESCE($3, nickname), \
                 first_name = COALESCE($4, first_name), \
                 last_name = COALESCE($5, last_name), \
                 bio = COALESCE($6, bio), \
                 profile_picture_url = COALESCE($7, profile_picture_url), \
                 github_profile_url = COALESCE($8, github_profile_url), \
                 linkedin_profile_url = COALESCE($9, linkedin_profile_url), \
                 role = COALESCE($10, role), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {ACCOUNT_COLUMNS}"
        );

        let row: Option<AccountRow> = sqlx::query_as(&sql)
            .bind(account_id)
            .bind(&normalized_email)
            .bind(&request.nickname)
            .bind(&request.first_name)
            .bind(&request.last_name)
            .bind(&request.bio)
            .bind(&request.profile_picture_url)
            .bind(&request.github_profile_url)
            .bind(&request.linkedin_profile_url)
            .bind(request.role)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(Self::map_database_error)?;

        row.map(Account::from).ok_or(AccountServiceError::NotFound)
    }

    /// Set the professional-status flag.
    ///
    /// A no-op when the flag already matches, so repeated requests cause no
    /// redundant writes or duplicate emails. The upgrade notification is
    /// best-effort: a delivery failure is logged and the status change stands.
    pub async fn update_professional_status(
        &self,
        account_id: Uuid,
        desired: bool,
    ) -> AccountServiceResult<Account> {
        let row = self
            .fetch_row(account_id)
            .await?
            .ok_or(AccountServiceError::NotFound)?;

        if row.is_professional == desired {
            return Ok(row.into());
        }

        let sql = format!(
            "UPDATE accounts \
             SET is_professional = $2, professional_status_updated_at = NOW(), updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {ACCOUNT_COLUMNS}"
        );
        let row: AccountRow = sqlx::query_as(&sql)
            .bind(account_id)
            .bind(desired)
            .fetch_one(&self.db_pool)
            .await?;

        info!(
            "Account {} professional status set to {}",
            row.id, desired
        );

        if desired {
            if let Some(email_service) = &self.email_service {
                if let Err(e) = email_service
                    .send_professional_upgrade_email(&row.email, row.display_name())
                    .await
                {
                    error!(
                        "Failed to send professional_upgrade email for {}: {}",
                        row.id, e
                    );
                }
            }
        }

        Ok(row.into())
    }

    // ------------------------------------------------------------------
    // Reads and deletion
    // ------------------------------------------------------------------

    /// Retrieve an account by its unique ID
    pub async fn get_by_id(&self, account_id: Uuid) -> AccountServiceResult<Account> {
        self.fetch_row(account_id)
            .await?
            .map(Account::from)
            .ok_or(AccountServiceError::NotFound)
    }

    /// Retrieve an account by its email address
    pub async fn get_by_email(&self, email: &str) -> AccountServiceResult<Account> {
        let normalized_email = normalize_email(email);
        self.fetch_row_by_email(&normalized_email)
            .await?
            .map(Account::from)
            .ok_or(AccountServiceError::NotFound)
    }

    /// List accounts ordered by creation time
    pub async fn list_accounts(
        &self,
        pagination: &Pagination,
    ) -> AccountServiceResult<Vec<Account>> {
        let sql = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts \
             ORDER BY created_at ASC \
             OFFSET $1 LIMIT $2"
        );
        let rows: Vec<AccountRow> = sqlx::query_as(&sql)
            .bind(pagination.offset)
            .bind(pagination.limit)
            .fetch_all(&self.db_pool)
            .await?;

        Ok(rows.into_iter().map(Account::from).collect())
    }

    /// Total number of accounts
    pub async fn count_accounts(&self) -> AccountServiceResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.db_pool)
            .await?;
        Ok(count)
    }

    /// Delete an account; repeat deletion reports NotFound
    pub async fn delete_account(&self, account_id: Uuid) -> AccountServiceResult<()> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(account_id)
            .execute(&self.db_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AccountServiceError::NotFound);
        }

        info!("Deleted account {}", account_id);
        Ok(())
    }

    /// Health check for the service
    pub async fn health_check(&self) -> AccountServiceResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.db_pool)
            .await
            .map_err(AccountServiceError::Database)?;

        Ok(())
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    async fn fetch_row(&self, account_id: Uuid) -> AccountServiceResult<Option<AccountRow>> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1");
        let row = sqlx::query_as(&sql)
            .bind(account_id)
            .fetch_optional(&self.db_pool)
            .await?;
        Ok(row)
    }

    async fn fetch_row_by_email(&self, email: &str) -> AccountServiceResult<Option<AccountRow>> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1");
        let row = sqlx::query_as(&sql)
            .bind(email)
            .fetch_optional(&self.db_pool)
            .await?;
        Ok(row)
    }

    /// Pick a generated nickname that is not yet taken.
    ///
    /// The unique index remains the authoritative guard; this loop only
    /// keeps the common path collision-free.
    async fn unique_nickname(&self) -> AccountServiceResult<String> {
        for _ in 0..8 {
            let candidate = generate_nickname();
            let exists: bool = sqlx::query_scalar(
                "SELECT EXISTS (SELECT 1 FROM accounts WHERE nickname = $1)",
            )
            .bind(&candidate)
            .fetch_one(&self.db_pool)
            .await?;

            if !exists {
                return Ok(candidate);
            }
        }
        Ok(generate_nickname())
    }

    fn map_database_error(e: sqlx::Error) -> AccountServiceError {
        if let sqlx::Error::Database(db_err) = &e {
            match db_err.constraint() {
                Some("accounts_email_key") => return AccountServiceError::DuplicateEmail,
                Some("accounts_nickname_key") => return AccountServiceError::DuplicateNickname,
                _ => {}
            }
        }
        AccountServiceError::Database(e)
    }
}
