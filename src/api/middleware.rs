//! Authentication Middleware
//!
//! Validates bearer tokens and stores the caller's identity/role claim in
//! request extensions. Role-gating itself happens in handlers through
//! [`require_role`], which delegates to the access-control policy.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::models::{CallerClaims, Role};
use crate::service::JwtService;
use crate::utils::access::authorize;
use crate::utils::error::AppError;

/// Extension type for the authenticated caller's claim pair
#[derive(Debug, Clone)]
pub struct AuthUser(pub CallerClaims);

/// Authentication middleware that validates bearer tokens.
///
/// Extracts the Authorization header, validates the token, and stores the
/// caller claims in request extensions. Authentication failures return 401.
pub async fn auth_middleware(
    State(jwt_service): State<Arc<JwtService>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| AppError::Authentication("Missing Authorization header".into()))?;

    if !auth_header.starts_with("Bearer ") {
        return Err(AppError::Authentication(
            "Invalid Authorization header format".into(),
        ));
    }

    let token = &auth_header[7..];

    let claims = jwt_service
        .validate_access_token(token)
        .map_err(|_| AppError::Authentication("Invalid or expired token".into()))?;

    request.extensions_mut().insert(AuthUser(claims));

    Ok(next.run(request).await)
}

/// Reject callers whose role claim grants none of the required roles.
///
/// The claim string is normalized case-insensitively; unknown roles fail
/// closed.
pub fn require_role(caller: &CallerClaims, required: &[Role]) -> Result<(), AppError> {
    if authorize(&caller.role, required) {
        Ok(())
    } else {
        Err(AppError::Forbidden("Operation not permitted".into()))
    }
}
