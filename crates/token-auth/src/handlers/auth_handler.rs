use crate::errors::ApiError;
use crate::models::{LoginRequest, LoginResponse};
use crate::repositories::users::UserDirectory;
use crate::services::login_service;
use crate::services::token_service::TokenService;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub directory: Arc<dyn UserDirectory>,
}

/// Handle signed token request
///
/// POST /auth/jwt
///
/// Both `username` and `password` are required; a missing field or a bad
/// pair is a 400 and an issuance failure is a 500.
pub async fn handle_issue_token(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (Some(username), Some(password)) = (payload.username, payload.password) else {
        return Err(ApiError::BadRequest(
            "username and password are required".to_string(),
        ));
    };

    let jwt = login_service::issue_token(
        state.directory.as_ref(),
        &state.tokens,
        &username,
        &password,
    )
    .await?;

    Ok(Json(LoginResponse { jwt }))
}
