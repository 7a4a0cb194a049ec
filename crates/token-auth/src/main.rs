use common::clock::SystemClock;
use std::net::SocketAddr;
use std::sync::Arc;
use token_auth::config::Config;
use token_auth::handlers::auth_handler::AppState;
use token_auth::repositories::users::InMemoryUserDirectory;
use token_auth::services::token_service::TokenService;
use token_auth::{observability, routes};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration is loaded before tracing so LOG_FORMAT can take effect
    let config = Config::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        e
    })?;

    observability::init_tracing(&config.logging)?;

    info!("Starting Token Auth service");
    info!(
        token_lifetime_seconds = config.token_lifetime_seconds,
        "Configuration loaded successfully"
    );

    let tokens = Arc::new(
        TokenService::new(config.jwt_secret.clone(), Arc::new(SystemClock))
            .with_lifetime(config.token_lifetime_seconds),
    );

    let state = Arc::new(AppState {
        tokens,
        directory: Arc::new(InMemoryUserDirectory::with_demo_users()),
    });

    let app = routes::build_routes(state);

    let addr: SocketAddr = config.bind_address.parse().map_err(|e| {
        error!("Invalid bind address: {}", e);
        e
    })?;

    info!("Token Auth listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        e
    })?;
    axum::serve(listener, app).await?;

    Ok(())
}
