//! Token Auth Service Library
//!
//! Issues and checks HS256 signed tokens, and resolves simple
//! username/password tokens against a user directory.
//!
//! # Modules
//!
//! - `authorizer` - Credential to identity resolution
//! - `codec` - Unpadded URL-safe base64 and JSON segment encoding
//! - `config` - Service configuration
//! - `crypto` - HMAC-SHA256 signing and verification
//! - `errors` - HTTP error responses
//! - `handlers` - HTTP request handlers
//! - `middleware` - Authentication middleware
//! - `models` - Token, user and request/response models
//! - `observability` - Tracing setup and log-safe field hashing
//! - `repositories` - User directory
//! - `routes` - Router assembly
//! - `services` - Token issuance, decoding and validation

pub mod authorizer;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod routes;
pub mod services;
