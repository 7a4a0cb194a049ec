//! Common utilities and types shared across the token auth workspace.

#![warn(clippy::pedantic)]

/// Module for the substitutable time source used by token validation
pub mod clock;

/// Module for common configuration
pub mod config;

/// Module for secret types that prevent accidental logging
pub mod secret;
