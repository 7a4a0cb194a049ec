//! Data models for both credential families.

use common::secret::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token header segment.
///
/// Fields are optional so that a partial or foreign header still decodes;
/// verification decides whether the result is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenHeader {
    pub alg: Option<String>,
    pub typ: Option<String>,
}

/// Token payload segment (the claims).
///
/// Absent claims serialize as `null`, so a decoded token re-serializes to
/// exactly the shape it was issued with.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenClaims {
    /// Unique token id
    pub jti: Option<String>,
    /// Issued at (Unix seconds)
    pub iat: Option<i64>,
    /// Not valid before (Unix seconds)
    pub nbf: Option<i64>,
    /// Expires at (Unix seconds)
    pub exp: Option<i64>,
    /// Subject, the username the token represents
    pub sub: Option<String>,
}

/// Redacts `sub` so claims can be logged without exposing usernames.
impl fmt::Debug for TokenClaims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenClaims")
            .field("jti", &self.jti)
            .field("iat", &self.iat)
            .field("nbf", &self.nbf)
            .field("exp", &self.exp)
            .field("sub", &self.sub.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Immutable signed-token value.
///
/// Built either fresh and unsigned by the token service, or from wire text by
/// decoding, in which case the raw signature segment is attached.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenModel {
    header: TokenHeader,
    claims: TokenClaims,
    signature: Option<String>,
}

impl TokenModel {
    /// A model with no signature attached.
    pub fn unsigned(header: TokenHeader, claims: TokenClaims) -> Self {
        Self {
            header,
            claims,
            signature: None,
        }
    }

    /// A model carrying the signature segment read from (or written to) the wire.
    pub fn signed(header: TokenHeader, claims: TokenClaims, signature: String) -> Self {
        Self {
            header,
            claims,
            signature: Some(signature),
        }
    }

    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    pub fn claims(&self) -> &TokenClaims {
        &self.claims
    }

    pub fn alg(&self) -> Option<&str> {
        self.header.alg.as_deref()
    }

    pub fn typ(&self) -> Option<&str> {
        self.header.typ.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.claims.jti.as_deref()
    }

    pub fn issued_at(&self) -> Option<i64> {
        self.claims.iat
    }

    pub fn not_before(&self) -> Option<i64> {
        self.claims.nbf
    }

    pub fn expires_at(&self) -> Option<i64> {
        self.claims.exp
    }

    pub fn subject(&self) -> Option<&str> {
        self.claims.sub.as_deref()
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }
}

impl fmt::Debug for TokenModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenModel")
            .field("header", &self.header)
            .field("claims", &self.claims)
            .field("signature", &self.signature.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Username/password pair recovered from a simple token.
#[derive(Debug, Clone)]
pub struct SimpleCredential {
    pub username: String,
    pub password: SecretString,
}

/// A user known to the directory.
#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub password: SecretString,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Request body for `POST /auth/jwt`.
///
/// Fields are optional so a missing one can be answered with 400 rather than
/// a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

/// Response body for `POST /auth/jwt`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub jwt: String,
}

/// Response body for identity-bearing endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct IdentityResponse {
    pub username: String,
}
