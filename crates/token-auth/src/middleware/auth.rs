use crate::authorizer::Authorizer;
use crate::errors::ApiError;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::IntoResponse,
};
use std::sync::Arc;

/// Middleware state holding the authorizer guarding a route group.
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub authorizer: Arc<dyn Authorizer>,
}

/// Pull the credential out of an `Authorization` header value.
///
/// A leading `Bearer ` is stripped when present; otherwise the whole value
/// is the credential. Blank values count as absent.
fn credential_from_header(value: &str) -> Option<&str> {
    let credential = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    if credential.is_empty() {
        None
    } else {
        Some(credential)
    }
}

/// Authentication middleware that resolves the caller's identity
///
/// Reads the `Authorization` header, hands it to the configured
/// [`Authorizer`], and stores the resulting `Identity` in request extensions
/// for downstream handlers. Every deny is a bare 401.
pub async fn require_identity(
    State(state): State<Arc<AuthMiddlewareState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let credential = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(credential_from_header)
        .map(str::to_owned);

    let identity = state.authorizer.authorize(credential.as_deref()).await?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
