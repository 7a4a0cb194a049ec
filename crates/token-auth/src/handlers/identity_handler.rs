use crate::authorizer::Identity;
use crate::models::IdentityResponse;
use axum::{Extension, Json};

/// Report the identity resolved by the auth middleware
///
/// GET /whoami/jwt, GET /whoami/simple
pub async fn whoami(Extension(identity): Extension<Identity>) -> Json<IdentityResponse> {
    Json(IdentityResponse {
        username: identity.username,
    })
}
