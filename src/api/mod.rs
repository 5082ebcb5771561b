//! HTTP API Layer
//!
//! Handlers, authentication middleware, and configurable route definitions.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::AppState;
pub use middleware::{auth_middleware, require_role, AuthUser};
pub use routes::{create_routes, RouterBuilder};
