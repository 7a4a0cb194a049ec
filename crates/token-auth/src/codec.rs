//! Compact URL-safe encoding for token segments.
//!
//! A record is serialized to JSON and then base64url-encoded with the `=`
//! padding stripped. Decoding restores the padding before reversing the
//! transform, so inputs produced by other encoders that keep or drop the
//! padding are both accepted.

use base64::{
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
    Engine,
};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

const PAD: char = '=';

/// Errors from encoding or decoding a token segment.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("segment is not valid base64url: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("segment is not a valid JSON record: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("record could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Base64url-encode raw bytes without padding.
pub fn encode_bytes(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode base64url text, restoring any stripped padding first.
pub fn decode_bytes(text: &str) -> Result<Vec<u8>, CodecError> {
    let missing = (4 - text.len() % 4) % 4;
    let mut padded = String::with_capacity(text.len() + missing);
    padded.push_str(text);
    padded.extend(std::iter::repeat(PAD).take(missing));

    Ok(URL_SAFE.decode(padded)?)
}

/// Serialize `record` to JSON and encode it.
pub fn encode<T: Serialize>(record: &T) -> Result<String, CodecError> {
    let json = serde_json::to_vec(record).map_err(CodecError::Serialize)?;
    Ok(encode_bytes(&json))
}

/// Decode `text` and parse the bytes back into a record.
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, CodecError> {
    let bytes = decode_bytes(text)?;
    serde_json::from_slice(&bytes).map_err(CodecError::InvalidJson)
}
