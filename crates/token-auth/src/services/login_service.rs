use crate::authorizer::{check_password, AuthError};
use crate::observability::hash_for_correlation;
use crate::repositories::users::{DirectoryError, UserDirectory};
use crate::services::token_service::{TokenError, TokenService};
use common::secret::SecretString;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("user lookup failed: {0}")]
    Directory(#[from] DirectoryError),

    #[error("token issuance failed: {0}")]
    Token(#[from] TokenError),
}

/// Exchange a username/password pair for a signed token.
///
/// An unknown user and a wrong password both yield `InvalidCredentials`.
#[instrument(skip_all)]
pub async fn issue_token(
    directory: &dyn UserDirectory,
    tokens: &TokenService,
    username: &str,
    password: &SecretString,
) -> Result<String, LoginError> {
    let identity = match check_password(directory, username, password).await {
        Ok(identity) => identity,
        Err(AuthError::Directory(e)) => return Err(LoginError::Directory(e)),
        Err(reason) => {
            tracing::warn!(
                target: "token_auth.login",
                user = %hash_for_correlation(username),
                %reason,
                "Login rejected"
            );
            return Err(LoginError::InvalidCredentials);
        }
    };

    let token = tokens.create(&identity.username).map_err(|e| {
        tracing::error!(target: "token_auth.login", error = %e, "Failed to issue token");
        LoginError::Token(e)
    })?;

    tracing::info!(
        target: "token_auth.login",
        user = %hash_for_correlation(&identity.username),
        "Token issued"
    );

    Ok(token)
}
