//! Simple token scheme: standard base64 of `"<username>:<password>"`.
//!
//! The encoding is reversible and unsigned, with no expiry. It identifies a
//! user only in combination with a directory lookup and password comparison,
//! and should be treated as a demo credential rather than a security boundary.

use crate::models::SimpleCredential;
use base64::{engine::general_purpose::STANDARD, Engine};
use common::secret::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::instrument;

/// Maximum accepted simple token size (8KB).
pub const MAX_SIMPLE_TOKEN_SIZE_BYTES: usize = 8192;

/// Errors from decoding a simple token.
#[derive(Debug, Error)]
pub enum SimpleTokenError {
    #[error("token exceeds maximum size")]
    TooLarge,

    #[error("token is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("token does not decode to UTF-8 text")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Encoder/decoder for the simple token scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTokenService;

impl SimpleTokenService {
    pub fn new() -> Self {
        Self
    }

    /// Encode a username/password pair.
    #[instrument(skip_all)]
    pub fn create(&self, username: &str, password: &SecretString) -> String {
        STANDARD.encode(format!("{username}:{}", password.expose_secret()))
    }

    /// Recover the username/password pair.
    ///
    /// Splits on the first `:`. Text without a `:` is all username and an
    /// empty password.
    #[instrument(skip_all)]
    pub fn decode(&self, token: &str) -> Result<SimpleCredential, SimpleTokenError> {
        if token.len() > MAX_SIMPLE_TOKEN_SIZE_BYTES {
            return Err(SimpleTokenError::TooLarge);
        }

        let decoded = String::from_utf8(STANDARD.decode(token.trim())?)?;

        let (username, password) = decoded
            .split_once(':')
            .unwrap_or((decoded.as_str(), ""));

        Ok(SimpleCredential {
            username: username.to_string(),
            password: SecretString::from(password),
        })
    }
}
