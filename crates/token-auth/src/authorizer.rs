//! Credential to identity resolution.
//!
//! [`Authorizer`] is the single place where any failure in decoding, signature
//! checks, time checks or user lookup becomes a deny decision. Each deny
//! carries an [`AuthError`] naming the reason for logs; callers should surface
//! only a generic 401.
//!
//! Two implementations are provided:
//! - [`SignedTokenAuthorizer`] trusts a verified token's subject as the identity.
//! - [`SimpleTokenAuthorizer`] decodes a username/password pair and checks it
//!   against the [`UserDirectory`].

use crate::observability::hash_for_correlation;
use crate::repositories::users::{DirectoryError, UserDirectory};
use crate::services::simple_token_service::{SimpleTokenError, SimpleTokenService};
use crate::services::CredentialDecoder;
use crate::services::token_service::{TokenError, TokenRejection, TokenService};
use async_trait::async_trait;
use common::secret::{ExposeSecret, SecretString};
use std::sync::Arc;
use thiserror::Error;
use tracing::instrument;

/// An authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
}

/// Reasons a credential was denied.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no credential presented")]
    MissingCredential,

    #[error("malformed signed token: {0}")]
    MalformedToken(#[from] TokenError),

    #[error("malformed simple token: {0}")]
    MalformedSimpleToken(#[from] SimpleTokenError),

    #[error("token rejected: {0}")]
    Rejected(#[from] TokenRejection),

    #[error("verified token has no subject")]
    MissingSubject,

    #[error("unknown user")]
    UnknownUser,

    #[error("password does not match")]
    PasswordMismatch,

    #[error("user lookup failed: {0}")]
    Directory(#[from] DirectoryError),
}

/// Resolves a presented credential into an [`Identity`].
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Short scheme name used in logs.
    fn scheme(&self) -> &'static str;

    /// Resolve `credential` or explain why it is denied.
    async fn authorize(&self, credential: Option<&str>) -> Result<Identity, AuthError>;
}

/// Look up `username` and compare the stored password byte for byte.
pub async fn check_password(
    directory: &dyn UserDirectory,
    username: &str,
    password: &SecretString,
) -> Result<Identity, AuthError> {
    let user = directory
        .find_by_username(username)
        .await?
        .ok_or(AuthError::UnknownUser)?;

    if user.password.expose_secret().as_bytes() != password.expose_secret().as_bytes() {
        return Err(AuthError::PasswordMismatch);
    }

    Ok(Identity {
        username: user.username,
    })
}

/// Authorizer for HS256 signed tokens.
pub struct SignedTokenAuthorizer {
    tokens: Arc<TokenService>,
}

impl SignedTokenAuthorizer {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

#[async_trait]
impl Authorizer for SignedTokenAuthorizer {
    fn scheme(&self) -> &'static str {
        self.tokens.family()
    }

    #[instrument(skip_all, name = "token_auth.authorize.signed")]
    async fn authorize(&self, credential: Option<&str>) -> Result<Identity, AuthError> {
        let result = resolve_signed(&self.tokens, credential);
        log_outcome(self.scheme(), &result);
        result
    }
}

fn resolve_signed(tokens: &TokenService, credential: Option<&str>) -> Result<Identity, AuthError> {
    let wire = credential.ok_or(AuthError::MissingCredential)?;
    let token = tokens.decode_credential(wire)?;
    tokens.validate(&token)?;

    let username = token.subject().ok_or(AuthError::MissingSubject)?;
    Ok(Identity {
        username: username.to_string(),
    })
}

/// Authorizer for simple username/password tokens.
pub struct SimpleTokenAuthorizer {
    simple_tokens: SimpleTokenService,
    directory: Arc<dyn UserDirectory>,
}

impl SimpleTokenAuthorizer {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            simple_tokens: SimpleTokenService::new(),
            directory,
        }
    }

    async fn resolve(&self, credential: Option<&str>) -> Result<Identity, AuthError> {
        let token = credential.ok_or(AuthError::MissingCredential)?;
        let credential = self.simple_tokens.decode_credential(token)?;
        check_password(
            self.directory.as_ref(),
            &credential.username,
            &credential.password,
        )
        .await
    }
}

#[async_trait]
impl Authorizer for SimpleTokenAuthorizer {
    fn scheme(&self) -> &'static str {
        self.simple_tokens.family()
    }

    #[instrument(skip_all, name = "token_auth.authorize.simple")]
    async fn authorize(&self, credential: Option<&str>) -> Result<Identity, AuthError> {
        let result = self.resolve(credential).await;
        log_outcome(self.scheme(), &result);
        result
    }
}

fn log_outcome(scheme: &'static str, result: &Result<Identity, AuthError>) {
    match result {
        Ok(identity) => tracing::debug!(
            target: "token_auth.authorizer",
            scheme,
            user = %hash_for_correlation(&identity.username),
            "Credential accepted"
        ),
        Err(AuthError::Directory(e)) => tracing::error!(
            target: "token_auth.authorizer",
            scheme,
            error = %e,
            "Credential denied: user directory failure"
        ),
        Err(reason) => tracing::warn!(
            target: "token_auth.authorizer",
            scheme,
            %reason,
            "Credential denied"
        ),
    }
}
