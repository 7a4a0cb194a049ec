//! HTTP routes.

use crate::authorizer::{SignedTokenAuthorizer, SimpleTokenAuthorizer};
use crate::handlers::{auth_handler, health, identity_handler};
use crate::handlers::auth_handler::AppState;
use crate::middleware::auth::{require_identity, AuthMiddlewareState};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Build the application routes.
///
/// - `/health` - liveness probe, public
/// - `/auth/jwt` - exchange username/password for a signed token, public
/// - `/whoami/jwt` - identity from a signed token
/// - `/whoami/simple` - identity from a simple token
/// - TraceLayer for request logging
/// - 30 second request timeout
pub fn build_routes(state: Arc<AppState>) -> Router {
    let signed_auth = Arc::new(AuthMiddlewareState {
        authorizer: Arc::new(SignedTokenAuthorizer::new(state.tokens.clone())),
    });
    let simple_auth = Arc::new(AuthMiddlewareState {
        authorizer: Arc::new(SimpleTokenAuthorizer::new(state.directory.clone())),
    });

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/auth/jwt", post(auth_handler::handle_issue_token))
        .with_state(state);

    let signed_routes = Router::new()
        .route("/whoami/jwt", get(identity_handler::whoami))
        .route_layer(middleware::from_fn_with_state(signed_auth, require_identity));

    let simple_routes = Router::new()
        .route("/whoami/simple", get(identity_handler::whoami))
        .route_layer(middleware::from_fn_with_state(simple_auth, require_identity));

    public_routes
        .merge(signed_routes)
        .merge(simple_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
}
