//! Signed token issuance, decoding and verification.
//!
//! Wire format is three dot-separated base64url segments:
//!
//! ```text
//! b64url({"alg":..,"typ":..}) . b64url({"jti":..,"iat":..,"nbf":..,"exp":..,"sub":..}) . b64url(HMAC-SHA256)
//! ```
//!
//! A token moves through `create` (unsigned model, then serialized wire text),
//! `decode` (model with the raw signature attached) and finally `verify`,
//! which either accepts it or rejects it. Decoding and verification are
//! separate so callers can tell a malformed credential apart from a
//! well-formed one that failed its signature or time checks.

use crate::codec::{self, CodecError};
use crate::crypto::{self, SignatureError, HS256};
use crate::models::{TokenClaims, TokenHeader, TokenModel};
use common::clock::Clock;
use common::secret::SecretString;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

/// Default token lifetime (1 hour).
pub const TOKEN_EXPIRY_SECONDS: i64 = 3600;

/// Token type tag written into the header.
pub const TOKEN_TYPE: &str = "JWT";

/// Maximum accepted wire token size (8KB).
///
/// Oversized input is rejected before any base64 or JSON work.
pub const MAX_TOKEN_SIZE_BYTES: usize = 8192;

/// Which JSON segment of a token failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSegment {
    Header,
    Payload,
}

impl fmt::Display for TokenSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSegment::Header => f.write_str("header"),
            TokenSegment::Payload => f.write_str("payload"),
        }
    }
}

/// Errors from creating or decoding a token.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token exceeds maximum size")]
    TooLarge,

    #[error("token must have three dot-separated segments")]
    InvalidFormat,

    #[error("failed to decode token {segment}: {source}")]
    Decode {
        segment: TokenSegment,
        #[source]
        source: CodecError,
    },

    #[error("failed to encode token: {0}")]
    Encode(#[source] CodecError),

    #[error("failed to sign token: {0}")]
    Signature(#[from] SignatureError),
}

/// Why a decoded token was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenRejection {
    #[error("token has no signature")]
    Unsigned,

    #[error("signature could not be recomputed")]
    SigningFailed,

    #[error("signature does not match")]
    SignatureMismatch,

    #[error("token has no activation window")]
    MissingWindow,

    #[error("token is not active until {not_before} (now {now})")]
    NotYetActive { not_before: i64, now: i64 },

    #[error("token expired at {expires_at} (now {now})")]
    Expired { expires_at: i64, now: i64 },
}

/// Creates, decodes and verifies HS256 tokens for one deployment secret.
pub struct TokenService {
    secret: SecretString,
    lifetime_seconds: i64,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Service with the default one hour lifetime.
    pub fn new(secret: SecretString, clock: Arc<dyn Clock>) -> Self {
        Self {
            secret,
            lifetime_seconds: TOKEN_EXPIRY_SECONDS,
            clock,
        }
    }

    /// Override the lifetime of newly created tokens.
    pub fn with_lifetime(mut self, lifetime_seconds: i64) -> Self {
        self.lifetime_seconds = lifetime_seconds;
        self
    }

    pub fn lifetime_seconds(&self) -> i64 {
        self.lifetime_seconds
    }

    /// Issue a token for `subject`, valid from now for the configured lifetime.
    #[instrument(skip_all)]
    pub fn create(&self, subject: &str) -> Result<String, TokenError> {
        let now = self.clock.now();

        let header = TokenHeader {
            alg: Some(HS256.to_string()),
            typ: Some(TOKEN_TYPE.to_string()),
        };
        let claims = TokenClaims {
            jti: Some(Uuid::new_v4().simple().to_string()),
            iat: Some(now),
            nbf: Some(now),
            exp: Some(now + self.lifetime_seconds),
            sub: Some(subject.to_string()),
        };

        let token = self.serialize(&TokenModel::unsigned(header, claims))?;

        tracing::debug!(
            target: "token_auth.token",
            iat = now,
            exp = now + self.lifetime_seconds,
            "Token issued"
        );

        Ok(token)
    }

    /// Sign a model and render it as wire text.
    ///
    /// Any signature already attached to the model is ignored.
    pub fn serialize(&self, token: &TokenModel) -> Result<String, TokenError> {
        let unsigned = unsigned_portion(token).map_err(TokenError::Encode)?;
        let signature = crypto::sign(unsigned.as_bytes(), &self.secret)?;
        Ok(format!("{unsigned}.{signature}"))
    }

    /// Parse wire text into a model without checking the signature.
    ///
    /// Segments past the third are ignored.
    #[instrument(skip_all)]
    pub fn decode(&self, wire: &str) -> Result<TokenModel, TokenError> {
        if wire.len() > MAX_TOKEN_SIZE_BYTES {
            tracing::debug!(
                target: "token_auth.token",
                token_size = wire.len(),
                max_size = MAX_TOKEN_SIZE_BYTES,
                "Token rejected: size exceeds maximum allowed"
            );
            return Err(TokenError::TooLarge);
        }

        let mut parts = wire.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature)) =
            (parts.next(), parts.next(), parts.next())
        else {
            tracing::debug!(target: "token_auth.token", "Token rejected: fewer than three segments");
            return Err(TokenError::InvalidFormat);
        };

        let header: TokenHeader = codec::decode(header_b64).map_err(|source| {
            tracing::debug!(target: "token_auth.token", error = %source, "Failed to decode token header");
            TokenError::Decode {
                segment: TokenSegment::Header,
                source,
            }
        })?;

        let claims: TokenClaims = codec::decode(payload_b64).map_err(|source| {
            tracing::debug!(target: "token_auth.token", error = %source, "Failed to decode token payload");
            TokenError::Decode {
                segment: TokenSegment::Payload,
                source,
            }
        })?;

        Ok(TokenModel::signed(header, claims, signature.to_string()))
    }

    /// Check signature and activation window against the current time.
    ///
    /// The unsigned portion is rebuilt from the model, not taken from the
    /// original wire bytes.
    pub fn validate(&self, token: &TokenModel) -> Result<(), TokenRejection> {
        let signature = token.signature().ok_or(TokenRejection::Unsigned)?;

        let signature_ok = unsigned_portion(token)
            .map_err(|e| e.to_string())
            .and_then(|unsigned| {
                crypto::verify(unsigned.as_bytes(), signature, &self.secret)
                    .map_err(|e| e.to_string())
            })
            .map_err(|error| {
                tracing::error!(target: "token_auth.token", %error, "Failed to recompute token signature");
                TokenRejection::SigningFailed
            })?;

        if !signature_ok {
            return Err(TokenRejection::SignatureMismatch);
        }

        let (Some(not_before), Some(expires_at)) = (token.not_before(), token.expires_at()) else {
            return Err(TokenRejection::MissingWindow);
        };

        let now = self.clock.now();
        if now < not_before {
            return Err(TokenRejection::NotYetActive { not_before, now });
        }
        if now > expires_at {
            return Err(TokenRejection::Expired { expires_at, now });
        }

        Ok(())
    }

    /// `true` when the token passes [`TokenService::validate`].
    #[instrument(skip_all)]
    pub fn verify(&self, token: &TokenModel) -> bool {
        match self.validate(token) {
            Ok(()) => true,
            Err(reason) => {
                tracing::debug!(target: "token_auth.token", %reason, "Token verification failed");
                false
            }
        }
    }
}

fn unsigned_portion(token: &TokenModel) -> Result<String, CodecError> {
    let header = codec::encode(token.header())?;
    let payload = codec::encode(token.claims())?;
    Ok(format!("{header}.{payload}"))
}
