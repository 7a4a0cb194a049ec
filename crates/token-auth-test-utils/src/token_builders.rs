//! Builder patterns for test data construction
//!
//! Provides a fluent API for tokens with arbitrary headers and claims,
//! including shapes the service itself never issues.

use crate::test_ids::{FIXED_NOW, TEST_LIFETIME_SECONDS};
use token_auth::crypto::HS256;
use token_auth::models::{TokenClaims, TokenHeader, TokenModel};
use token_auth::services::token_service::{TokenService, TOKEN_TYPE};

/// Builder for test tokens
///
/// Defaults to a well-formed token for `test-subject` valid for one hour
/// from `FIXED_NOW`.
///
/// # Example
/// ```rust,ignore
/// let wire = TestTokenBuilder::new()
///     .for_user("alice")
///     .valid_from(FIXED_NOW + 60)
///     .sign_with(&tokens);
/// ```
pub struct TestTokenBuilder {
    header: TokenHeader,
    claims: TokenClaims,
}

impl TestTokenBuilder {
    /// Create a new token builder with defaults
    pub fn new() -> Self {
        Self {
            header: TokenHeader {
                alg: Some(HS256.to_string()),
                typ: Some(TOKEN_TYPE.to_string()),
            },
            claims: TokenClaims {
                jti: Some("test-token-id".to_string()),
                iat: Some(FIXED_NOW),
                nbf: Some(FIXED_NOW),
                exp: Some(FIXED_NOW + TEST_LIFETIME_SECONDS),
                sub: Some("test-subject".to_string()),
            },
        }
    }

    /// Set the subject
    pub fn for_user(mut self, subject: &str) -> Self {
        self.claims.sub = Some(subject.to_string());
        self
    }

    /// Drop the subject claim
    pub fn without_subject(mut self) -> Self {
        self.claims.sub = None;
        self
    }

    /// Set issued-at timestamp
    pub fn issued_at(mut self, timestamp: i64) -> Self {
        self.claims.iat = Some(timestamp);
        self
    }

    /// Set the not-before timestamp
    pub fn valid_from(mut self, timestamp: i64) -> Self {
        self.claims.nbf = Some(timestamp);
        self
    }

    /// Set the expiry timestamp
    pub fn expires_at(mut self, timestamp: i64) -> Self {
        self.claims.exp = Some(timestamp);
        self
    }

    /// Drop both window claims (`nbf` and `exp`)
    pub fn without_window(mut self) -> Self {
        self.claims.nbf = None;
        self.claims.exp = None;
        self
    }

    /// Set the header `alg` value
    pub fn with_alg(mut self, alg: &str) -> Self {
        self.header.alg = Some(alg.to_string());
        self
    }

    /// Build an unsigned token model
    pub fn build(self) -> TokenModel {
        TokenModel::unsigned(self.header, self.claims)
    }

    /// Sign with `tokens` and return the wire form
    pub fn sign_with(self, tokens: &TokenService) -> String {
        tokens
            .serialize(&self.build())
            .expect("Failed to serialize test token")
    }
}

impl Default for TestTokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}
