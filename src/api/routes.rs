//! API Route Definitions
//!
//! Routes are assembled through a builder so deployments can expose only the
//! endpoint groups they need (e.g. a public registration service without the
//! administrative surface).

use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use super::handlers::{self, AppState};
use super::middleware::auth_middleware;
use crate::service::JwtService;

/// Builder for creating API routes with configurable endpoint groups
#[derive(Default)]
pub struct RouterBuilder {
    /// Health check endpoint (GET /health)
    health_check: bool,
    /// Registration and email verification (POST /register, GET /verify-email/{id}/{token})
    registration: bool,
    /// Login endpoint (POST /login)
    login: bool,
    /// Password reset flow (POST /forgot-password, GET+POST /reset-password)
    password_reset: bool,
    /// Authenticated profile self-service (PUT /profile)
    profile: bool,
    /// Admin/manager account management (the /users surface)
    admin: bool,
}

impl RouterBuilder {
    /// Creates a new router builder with all route groups disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a router builder with every route group enabled
    pub fn with_all_routes() -> Self {
        Self {
            health_check: true,
            registration: true,
            login: true,
            password_reset: true,
            profile: true,
            admin: true,
        }
    }

    /// Creates a router builder with only the unauthenticated surface
    pub fn with_public_routes() -> Self {
        Self {
            health_check: true,
            registration: true,
            login: true,
            password_reset: true,
            profile: false,
            admin: false,
        }
    }

    pub fn health_check(mut self, enabled: bool) -> Self {
        self.health_check = enabled;
        self
    }

    pub fn registration(mut self, enabled: bool) -> Self {
        self.registration = enabled;
        self
    }

    pub fn login(mut self, enabled: bool) -> Self {
        self.login = enabled;
        self
    }

    pub fn password_reset(mut self, enabled: bool) -> Self {
        self.password_reset = enabled;
        self
    }

    pub fn profile(mut self, enabled: bool) -> Self {
        self.profile = enabled;
        self
    }

    pub fn admin(mut self, enabled: bool) -> Self {
        self.admin = enabled;
        self
    }

    /// Build the router. Authenticated groups are wrapped in the bearer-token
    /// middleware, which needs the JWT service at construction time.
    pub fn build(self, jwt_service: Arc<JwtService>) -> Router<AppState> {
        let mut router = Router::new();

        if self.health_check {
            router = router.route("/health", get(handlers::health_check));
        }

        if self.registration {
            router = router
                .route("/register", post(handlers::register))
                .route(
                    "/verify-email/:account_id/:token",
                    get(handlers::verify_email),
                );
        }

        if self.login {
            router = router.route("/login", post(handlers::login));
        }

        if self.password_reset {
            router = router
                .route("/forgot-password", post(handlers::forgot_password))
                .route(
                    "/reset-password/:account_id/:token",
                    get(handlers::check_reset_token),
                )
                .route("/reset-password", post(handlers::reset_password));
        }

        let mut protected = Router::new();
        let mut any_protected = false;

        if self.profile {
            protected = protected.route("/profile", put(handlers::update_own_profile));
            any_protected = true;
        }

        if self.admin {
            protected = protected
                .route(
                    "/users",
                    get(handlers::list_accounts).post(handlers::create_account),
                )
                .route(
                    "/users/:account_id",
                    get(handlers::get_account)
                        .put(handlers::update_account)
                        .delete(handlers::delete_account),
                )
                .route(
                    "/users/:account_id/professional-status",
                    put(handlers::update_professional_status),
                )
                .route("/users/:account_id/unlock", put(handlers::unlock_account));
            any_protected = true;
        }

        if any_protected {
            router = router.merge(
                protected.route_layer(from_fn_with_state(jwt_service, auth_middleware)),
            );
        }

        router
    }
}

/// Convenience constructor for the full route set
pub fn create_routes(jwt_service: Arc<JwtService>) -> Router<AppState> {
    RouterBuilder::with_all_routes().build(jwt_service)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt() -> Arc<JwtService> {
        Arc::new(JwtService::new("test_secret_key".to_string()))
    }

    #[test]
    fn test_build_all_routes() {
        // Construction must not panic with every group enabled
        let _router = RouterBuilder::with_all_routes().build(jwt());
    }

    #[test]
    fn test_build_public_routes() {
        let _router = RouterBuilder::with_public_routes().build(jwt());
    }

    #[test]
    fn test_build_empty_router() {
        let _router = RouterBuilder::new().build(jwt());
    }

    #[test]
    fn test_build_selective_routes() {
        let _router = RouterBuilder::new()
            .health_check(true)
            .login(true)
            .profile(true)
            .build(jwt());
    }
}
