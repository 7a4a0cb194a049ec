//! Token signing with HMAC-SHA256.
//!
//! The key is the UTF-8 encoding of the deployment's shared secret. Signatures
//! are carried on the wire as base64url without padding, the same transform
//! the codec applies to header and payload segments.
//!
//! Verification recomputes the MAC over the message and compares it against
//! the presented signature in constant time.

use crate::codec;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use common::secret::{ExposeSecret, SecretString};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;
use tracing::instrument;

type HmacSha256 = Hmac<Sha256>;

/// Algorithm identifier written into the token header.
pub const HS256: &str = "HS256";

/// Internal failure while computing a MAC.
#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("signing key was rejected: {0}")]
    InvalidKey(String),
}

fn keyed_mac(secret: &SecretString) -> Result<HmacSha256, SignatureError> {
    HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
        .map_err(|e| SignatureError::InvalidKey(e.to_string()))
}

/// Sign `message` with `secret`, returning the base64url signature.
#[instrument(skip_all)]
pub fn sign(message: &[u8], secret: &SecretString) -> Result<String, SignatureError> {
    let mut mac = keyed_mac(secret)?;
    mac.update(message);
    Ok(codec::encode_bytes(&mac.finalize().into_bytes()))
}

/// Check that `signature` is the signature of `message` under `secret`.
///
/// Returns `Ok(false)` for a mismatch, including a signature that is not
/// canonical unpadded base64url. Only a failure to key the MAC is an error.
#[instrument(skip_all)]
pub fn verify(
    message: &[u8],
    signature: &str,
    secret: &SecretString,
) -> Result<bool, SignatureError> {
    let mut mac = keyed_mac(secret)?;
    mac.update(message);

    // Strict decode: padded or non-canonical encodings never match.
    let Ok(presented) = URL_SAFE_NO_PAD.decode(signature) else {
        tracing::debug!(target: "token_auth.crypto", "Signature is not canonical base64url");
        return Ok(false);
    };

    Ok(mac.verify_slice(&presented).is_ok())
}
