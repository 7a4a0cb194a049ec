//! # Token Auth Test Utilities
//!
//! Shared test utilities for the token auth service.
//!
//! This crate provides:
//! - Deterministic fixtures (fixed secret, pinned clock)
//! - Test data builders (TestTokenBuilder)
//! - Server test harness (TestAuthServer for E2E tests)
//! - Fixed test constants (timestamps, demo users)
//! - Custom assertions (TokenAssertions trait)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use token_auth_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() {
//!     let clock = fixed_clock();
//!     let tokens = test_token_service(clock.clone());
//!
//!     let wire = TestTokenBuilder::new()
//!         .for_user("alice")
//!         .valid_from(FIXED_NOW)
//!         .expires_at(FIXED_NOW + 60)
//!         .sign_with(&tokens);
//!
//!     wire.assert_valid_token()
//!         .assert_for_subject("alice")
//!         .assert_window(FIXED_NOW, FIXED_NOW + 60);
//! }
//! ```

pub mod assertions;
pub mod crypto_fixtures;
pub mod server_harness;
pub mod test_ids;
pub mod token_builders;

// Re-export commonly used items
pub use assertions::*;
pub use crypto_fixtures::*;
pub use server_harness::*;
pub use test_ids::*;
pub use token_builders::*;
