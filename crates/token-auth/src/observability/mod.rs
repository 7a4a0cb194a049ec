//! Logging setup and log-safe field helpers.
//!
//! # Privacy by Default
//!
//! Instrumented functions use `#[instrument(skip_all)]`. Fields fall into:
//! - **SAFE**: logged as-is (timestamps, scheme names, rejection reasons)
//! - **HASHED**: SHA-256 correlation hash only (usernames, token subjects)
//! - **NEVER**: tokens, passwords, the signing secret

use common::config::{LogFormat, LoggingConfig};
use sha2::{Digest, Sha256};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.default_filter`. Fails if a
/// subscriber is already installed.
pub fn init_tracing(
    config: &LoggingConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    }
}

/// Hash a field value for correlation in logs (SHA-256, first 8 hex chars)
///
/// One-way and truncated: enough to follow one user across log lines
/// without writing the username itself.
pub fn hash_for_correlation(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    hex::encode(digest.get(..4).unwrap_or_default())
}
