//! Secret types for protecting sensitive values from accidental logging.
//!
//! This module re-exports types from the [`secrecy`] crate. Use these types
//! for every value that must never show up in logs: the token signing secret,
//! user passwords, and raw credential strings.
//!
//! `SecretString` implements `Debug` with redaction, so a struct that derives
//! `Debug` while holding a secret stays safe to log via `{:?}` or tracing.
//! Secrets are zeroized when dropped.
//!
//! # Example
//!
//! ```rust
//! use common::secret::{ExposeSecret, SecretString};
//!
//! #[derive(Debug)]
//! struct SigningConfig {
//!     algorithm: &'static str,
//!     secret: SecretString,
//! }
//!
//! let cfg = SigningConfig {
//!     algorithm: "HS256",
//!     secret: SecretString::from("my_secret_key"),
//! };
//!
//! // The secret is redacted in debug output
//! assert!(!format!("{cfg:?}").contains("my_secret_key"));
//!
//! // Reading the value requires an explicit call
//! let key: &str = cfg.secret.expose_secret();
//! assert_eq!(key, "my_secret_key");
//! ```
//!
//! # Usage Guidelines
//!
//! Use `SecretString` for:
//! - The HMAC signing secret (`JWT_SECRET`)
//! - User passwords, both stored and presented
//! - Raw `Authorization` header values before they are decoded

pub use secrecy::{ExposeSecret, SecretString};
