//! Account Service Development Server
//!
//! Runs the complete HTTP server with every endpoint group enabled for local
//! development. Production deployments compose their own router with
//! `RouterBuilder` and only the groups they expose.

use std::sync::Arc;

use dotenv::dotenv;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use account_service::{
    api::{create_routes, AppState},
    config::AppConfig,
    service::{AccountService, EmailService, JwtService},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv().ok();

    env_logger::init();

    log::info!("🚀 Starting account service v{}", account_service::VERSION);

    let config = AppConfig::from_env()?;
    config.validate()?;

    log::info!("✅ Configuration loaded and validated");

    let database_pool = config.database.create_pool().await?;

    log::info!("🔄 Running database migrations...");
    sqlx::migrate!("./migrations").run(&database_pool).await?;
    log::info!("✅ Database migrations completed");

    let email_service = match &config.email {
        Some(email_config) => {
            let service = EmailService::new(email_config.clone())?;
            log::info!("✅ Email service initialized");
            Some(Arc::new(service))
        }
        None => {
            log::warn!("⚠️  SMTP not configured; outbound email disabled");
            None
        }
    };

    let account_service = AccountService::with_config(
        database_pool,
        config.auth.clone(),
        email_service,
    );
    let jwt_service = Arc::new(JwtService::with_expiration(
        config.jwt.secret.clone(),
        chrono::Duration::minutes(config.jwt.expires_minutes),
    ));

    log::info!("✅ Core services initialized");

    let app_state = AppState {
        account_service: Arc::new(account_service),
        jwt_service: jwt_service.clone(),
    };

    let app = create_routes(jwt_service).with_state(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    log::info!("🌐 Account service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
