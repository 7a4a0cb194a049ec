use common::config::{LogFormat, LoggingConfig, DEFAULT_LOG_FILTER};
use common::secret::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Default token lifetime in seconds (1 hour).
pub const DEFAULT_TOKEN_LIFETIME_SECONDS: i64 = 3600;

/// Longest token lifetime accepted from configuration (1 day).
pub const MAX_TOKEN_LIFETIME_SECONDS: i64 = 86_400;

/// Default listen address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

/// Service configuration.
///
/// `Debug` is derived; the signing secret prints as `[REDACTED]` through
/// `SecretString`.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub jwt_secret: SecretString,
    pub token_lifetime_seconds: i64,
    pub logging: LoggingConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("JWT_SECRET must not be empty")]
    EmptySecret,

    #[error("Invalid TOKEN_LIFETIME_SECONDS: {0}")]
    InvalidLifetime(String),

    #[error("Invalid LOG_FORMAT: {0}")]
    InvalidLogFormat(String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let jwt_secret = SecretString::from(
            vars.get("JWT_SECRET")
                .ok_or_else(|| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?
                .as_str(),
        );

        if jwt_secret.expose_secret().is_empty() {
            return Err(ConfigError::EmptySecret);
        }

        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let token_lifetime_seconds = match vars.get("TOKEN_LIFETIME_SECONDS") {
            Some(value) => {
                let seconds: i64 = value.trim().parse().map_err(|e| {
                    ConfigError::InvalidLifetime(format!("{value:?} is not an integer: {e}"))
                })?;

                if !(1..=MAX_TOKEN_LIFETIME_SECONDS).contains(&seconds) {
                    return Err(ConfigError::InvalidLifetime(format!(
                        "{seconds} is outside 1..={MAX_TOKEN_LIFETIME_SECONDS}"
                    )));
                }
                seconds
            }
            None => DEFAULT_TOKEN_LIFETIME_SECONDS,
        };

        let format = match vars.get("LOG_FORMAT") {
            Some(value) => LogFormat::parse(value)
                .ok_or_else(|| ConfigError::InvalidLogFormat(value.clone()))?,
            None => LogFormat::default(),
        };

        Ok(Config {
            bind_address,
            jwt_secret,
            token_lifetime_seconds,
            logging: LoggingConfig {
                default_filter: DEFAULT_LOG_FILTER.to_string(),
                format,
            },
        })
    }
}
