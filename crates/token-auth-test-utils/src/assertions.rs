//! Custom test assertions for expressive tests
//!
//! Decodes the wire form independently of the service so a bug in the
//! service's own decoder cannot mask a bad token.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;

/// Token header structure
#[derive(Debug, Deserialize)]
struct WireHeader {
    pub alg: String,
    pub typ: String,
}

/// Token claims structure
#[derive(Debug, Deserialize)]
struct WireClaims {
    pub jti: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub sub: String,
}

fn segments(token: &str) -> Vec<&str> {
    token.split('.').collect()
}

fn claims_of(token: &str) -> WireClaims {
    let parts = segments(token);
    let payload = URL_SAFE_NO_PAD
        .decode(parts.get(1).expect("Token has no payload segment"))
        .expect("Invalid token payload");
    serde_json::from_slice(&payload).expect("Failed to parse token claims")
}

/// Custom assertions for issued tokens
///
/// # Example
/// ```rust,ignore
/// wire.assert_valid_token()
///     .assert_for_subject("alice")
///     .assert_window(FIXED_NOW, FIXED_NOW + 3600);
/// ```
pub trait TokenAssertions {
    /// Assert the token has the issued shape: three unpadded segments,
    /// an `HS256`/`JWT` header and a complete claim set
    fn assert_valid_token(&self) -> &Self;

    /// Assert that the token is for the specified subject
    fn assert_for_subject(&self, subject: &str) -> &Self;

    /// Assert `nbf` and `exp` exactly
    fn assert_window(&self, not_before: i64, expires_at: i64) -> &Self;
}

impl TokenAssertions for String {
    fn assert_valid_token(&self) -> &Self {
        let parts = segments(self);
        assert_eq!(
            parts.len(),
            3,
            "Token must have 3 parts (header.payload.signature), got {}",
            parts.len()
        );
        assert!(!self.contains('='), "Token must not carry base64 padding");

        let header_bytes = URL_SAFE_NO_PAD
            .decode(parts.first().expect("Token has no header segment"))
            .expect("Failed to base64 decode token header");
        let header: WireHeader =
            serde_json::from_slice(&header_bytes).expect("Failed to parse token header JSON");
        assert_eq!(header.alg, "HS256", "Expected HS256 algorithm");
        assert_eq!(header.typ, "JWT", "Expected JWT type");

        let claims = claims_of(self);
        assert!(!claims.jti.is_empty(), "Token id must not be empty");
        assert_eq!(claims.iat, claims.nbf, "Issued tokens are active from issuance");

        let signature = parts.get(2).expect("Token has no signature segment");
        assert_eq!(
            URL_SAFE_NO_PAD
                .decode(signature)
                .expect("Failed to base64 decode signature")
                .len(),
            32,
            "HMAC-SHA256 signature must be 32 bytes"
        );

        self
    }

    fn assert_for_subject(&self, subject: &str) -> &Self {
        let claims = claims_of(self);
        assert_eq!(
            claims.sub, subject,
            "Expected subject '{}', got '{}'",
            subject, claims.sub
        );
        self
    }

    fn assert_window(&self, not_before: i64, expires_at: i64) -> &Self {
        let claims = claims_of(self);
        assert_eq!(claims.nbf, not_before, "Unexpected nbf");
        assert_eq!(claims.exp, expires_at, "Unexpected exp");
        self
    }
}
