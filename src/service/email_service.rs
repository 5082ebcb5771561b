//! Email Service
//!
//! Templated outbound email for account lifecycle notifications. The account
//! state machine decides WHEN to send; this service knows HOW. Each
//! notification kind maps to a fixed subject and template pair.

use chrono::Datelike;
use lettre::{
    message::{header, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use log::{debug, error, info};
use std::fmt;
use tera::{Context, Tera};

use crate::config::EmailConfig;
use crate::utils::error::{AppError, AppResult};

/// The fixed set of account notifications this service can deliver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    EmailVerification,
    PasswordReset,
    AccountLocked,
    ProfessionalUpgrade,
}

impl NotificationKind {
    /// Subject line for the outbound message
    pub fn subject(&self) -> &'static str {
        match self {
            NotificationKind::EmailVerification => "Verify Your Account",
            NotificationKind::PasswordReset => "Password Reset Instructions",
            NotificationKind::AccountLocked => "Account Locked Notification",
            NotificationKind::ProfessionalUpgrade => "Professional Status Upgrade",
        }
    }

    /// Template base name; `.html` and `.txt` variants are registered
    fn template_base(&self) -> &'static str {
        match self {
            NotificationKind::EmailVerification => "email_verification",
            NotificationKind::PasswordReset => "password_reset",
            NotificationKind::AccountLocked => "account_locked",
            NotificationKind::ProfessionalUpgrade => "professional_upgrade",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_base())
    }
}

/// Email service for account lifecycle notifications
pub struct EmailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    templates: Tera,
    config: EmailConfig,
}

impl EmailService {
    /// Create a new email service from SMTP configuration
    pub fn new(config: EmailConfig) -> AppResult<Self> {
        let creds = Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| AppError::Configuration(format!("Failed to configure SMTP relay: {}", e)))?
            .port(config.smtp_port)
            .credentials(creds)
            .build();

        // Filesystem templates win when present; embedded defaults otherwise
        let mut templates = Tera::new("templates/**/*").unwrap_or_else(|_| {
            debug!("No template directory found, using embedded templates");
            Tera::default()
        });

        Self::add_embedded_templates(&mut templates)?;

        Ok(Self {
            transport,
            templates,
            config,
        })
    }

    /// Base URL for links embedded in outbound email
    pub fn base_url(&self) -> &str {
        &self.config.app_base_url
    }

    /// Render and send a notification of the given kind.
    ///
    /// The caller decides whether a failure here is fatal: verification and
    /// reset emails propagate, lock/upgrade notices are fire-and-forget.
    pub async fn send_account_email(
        &self,
        kind: NotificationKind,
        to_email: &str,
        context: &Context,
    ) -> AppResult<()> {
        info!("Sending {} email to: {}", kind, to_email);

        let mut context = context.clone();
        context.insert("app_name", &self.config.from_name);
        context.insert("current_year", &chrono::Utc::now().year());

        let html_body = self
            .templates
            .render(&format!("{}.html", kind.template_base()), &context)
            .map_err(|e| AppError::Internal(format!("Failed to render HTML template: {}", e)))?;

        let text_body = self
            .templates
            .render(&format!("{}.txt", kind.template_base()), &context)
            .map_err(|e| AppError::Internal(format!("Failed to render text template: {}", e)))?;

        let message = Message::builder()
            .from(
                format!("{} <{}>", self.config.from_name, self.config.from_email)
                    .parse()
                    .map_err(|e| AppError::Configuration(format!("Invalid from address: {}", e)))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| AppError::BadRequest(format!("Invalid recipient email: {}", e)))?)
            .subject(kind.subject())
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(text_body),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(html_body),
                    ),
            )
            .map_err(|e| AppError::Internal(format!("Failed to build email message: {}", e)))?;

        match self.transport.send(message).await {
            Ok(_) => {
                info!("{} email sent successfully to: {}", kind, to_email);
                Ok(())
            }
            Err(e) => {
                error!("Failed to send {} email to {}: {}", kind, to_email, e);
                Err(AppError::ExternalService(format!(
                    "Failed to send email: {}",
                    e
                )))
            }
        }
    }

    /// Send the email-verification link for a freshly created account
    pub async fn send_verification_email(
        &self,
        to_email: &str,
        name: &str,
        account_id: uuid::Uuid,
        token: &str,
    ) -> AppResult<()> {
        let verification_url = format!(
            "{}/verify-email/{}/{}",
            self.config.app_base_url.trim_end_matches('/'),
            account_id,
            token
        );

        let mut context = Context::new();
        context.insert("name", name);
        context.insert("verification_url", &verification_url);

        self.send_account_email(NotificationKind::EmailVerification, to_email, &context)
            .await
    }

    /// Send password-reset instructions with the minutes left before expiry
    pub async fn send_password_reset_email(
        &self,
        to_email: &str,
        name: &str,
        account_id: uuid::Uuid,
        token: &str,
        expires_in_minutes: i64,
    ) -> AppResult<()> {
        let reset_url = format!(
            "{}/reset-password/{}/{}",
            self.config.app_base_url.trim_end_matches('/'),
            account_id,
            token
        );

        let mut context = Context::new();
        context.insert("name", name);
        context.insert("reset_url", &reset_url);
        context.insert("expiry_minutes", &expires_in_minutes);

        self.send_account_email(NotificationKind::PasswordReset, to_email, &context)
            .await
    }

    /// Notify a user their account has been locked out of login
    pub async fn send_account_locked_email(&self, to_email: &str, name: &str) -> AppResult<()> {
        let mut context = Context::new();
        context.insert("name", name);

        self.send_account_email(NotificationKind::AccountLocked, to_email, &context)
            .await
    }

    /// Congratulate a user on their professional-status upgrade
    pub async fn send_professional_upgrade_email(
        &self,
        to_email: &str,
        name: &str,
    ) -> AppResult<()> {
        let mut context = Context::new();
        context.insert("name", name);

        self.send_account_email(NotificationKind::ProfessionalUpgrade, to_email, &context)
            .await
    }

    /// Register the embedded fallback templates for every notification kind
    fn add_embedded_templates(tera: &mut Tera) -> AppResult<()> {
        let pairs: &[(&str, &str, &str)] = &[
            (
                "email_verification",
                r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Verify Your Account</title>
</head>
<body>
    <p>Hello {{ name }},</p>
    <p>Thank you for signing up! Please confirm your email address by clicking the link below:</p>
    <p><a href="{{ verification_url }}">Verify your account</a></p>
    <p>If you didn't create an account, you can safely ignore this email.</p>
    <p>Best regards,<br>The {{ app_name }} Team</p>
    <p style="font-size: 12px; color: #666;">&copy; {{ current_year }} {{ app_name }}. All rights reserved.</p>
</body>
</html>
"#,
                r#"
Hello {{ name }},

Thank you for signing up! Please confirm your email address by visiting:

{{ verification_url }}

If you didn't create an account, you can safely ignore this email.

Best regards,
The {{ app_name }} Team
"#,
            ),
            (
                "password_reset",
                r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Password Reset Instructions</title>
</head>
<body>
    <p>Hello {{ name }},</p>
    <p>We received a request to reset your password. Click the link below to choose a new one:</p>
    <p><a href="{{ reset_url }}">Reset your password</a></p>
    <p>This link will expire in <strong>{{ expiry_minutes }} minutes</strong>.</p>
    <p>If you didn't request a password reset, you can safely ignore this email.</p>
    <p>Best regards,<br>The {{ app_name }} Team</p>
</body>
</html>
"#,
                r#"
Hello {{ name }},

We received a request to reset your password. Visit the link below to choose a new one:

{{ reset_url }}

This link will expire in {{ expiry_minutes }} minutes.

If you didn't request a password reset, you can safely ignore this email.

Best regards,
The {{ app_name }} Team
"#,
            ),
            (
                "account_locked",
                r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Account Locked Notification</title>
</head>
<body>
    <p>Hello {{ name }},</p>
    <p>Your account has been locked after too many failed login attempts.</p>
    <p>You can restore access by resetting your password, or contact support if you believe this was not you.</p>
    <p>Best regards,<br>The {{ app_name }} Team</p>
</body>
</html>
"#,
                r#"
Hello {{ name }},

Your account has been locked after too many failed login attempts.

You can restore access by resetting your password, or contact support if you believe this was not you.

Best regards,
The {{ app_name }} Team
"#,
            ),
            (
                "professional_upgrade",
                r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Professional Status Upgrade</title>
</head>
<body>
    <p>Hello {{ name }},</p>
    <p>Congratulations! Your account has been upgraded to professional status.</p>
    <p>Best regards,<br>The {{ app_name }} Team</p>
</body>
</html>
"#,
                r#"
Hello {{ name }},

Congratulations! Your account has been upgraded to professional status.

Best regards,
The {{ app_name }} Team
"#,
            ),
        ];

        for (base, html, text) in pairs {
            tera.add_raw_template(&format!("{}.html", base), html)
                .map_err(|e| {
                    AppError::Configuration(format!("Failed to add {} HTML template: {}", base, e))
                })?;
            tera.add_raw_template(&format!("{}.txt", base), text)
                .map_err(|e| {
                    AppError::Configuration(format!("Failed to add {} text template: {}", base, e))
                })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EmailConfig {
        EmailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 587,
            smtp_username: "test@example.com".to_string(),
            smtp_password: "password".to_string(),
            from_email: "noreply@example.com".to_string(),
            from_name: "Account Service".to_string(),
            app_base_url: "http://localhost:3000".to_string(),
        }
    }

    #[test]
    fn test_notification_subjects() {
        assert_eq!(
            NotificationKind::EmailVerification.subject(),
            "Verify Your Account"
        );
        assert_eq!(
            NotificationKind::PasswordReset.subject(),
            "Password Reset Instructions"
        );
        assert_eq!(
            NotificationKind::AccountLocked.subject(),
            "Account Locked Notification"
        );
        assert_eq!(
            NotificationKind::ProfessionalUpgrade.subject(),
            "Professional Status Upgrade"
        );
    }

    #[test]
    fn test_templates_registered_for_every_kind() {
        let service = EmailService::new(test_config()).unwrap();

        for kind in [
            NotificationKind::EmailVerification,
            NotificationKind::PasswordReset,
            NotificationKind::AccountLocked,
            NotificationKind::ProfessionalUpgrade,
        ] {
            let html = format!("{}.html", kind.template_base());
            let text = format!("{}.txt", kind.template_base());
            assert!(
                service.templates.get_template_names().any(|n| n == html),
                "missing template {}",
                html
            );
            assert!(
                service.templates.get_template_names().any(|n| n == text),
                "missing template {}",
                text
            );
        }
    }

    #[test]
    fn test_password_reset_template_renders_expiry() {
        let service = EmailService::new(test_config()).unwrap();

        let mut context = Context::new();
        context.insert("name", "Jane");
        context.insert("reset_url", "http://localhost:3000/reset-password/x/y");
        context.insert("expiry_minutes", &45);
        context.insert("app_name", "Account Service");
        context.insert("current_year", &2025);

        let rendered = service.templates.render("password_reset.txt", &context).unwrap();
        assert!(rendered.contains("45 minutes"));
        assert!(rendered.contains("Jane"));
    }
}
