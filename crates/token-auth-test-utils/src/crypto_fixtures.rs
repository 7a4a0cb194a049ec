//! Deterministic fixtures for testing
//!
//! Every fixture uses the fixed test secret and a clock pinned to
//! [`FIXED_NOW`](crate::test_ids::FIXED_NOW) unless told otherwise.

use crate::test_ids::{FIXED_NOW, TEST_OTHER_SECRET, TEST_SECRET};
use common::clock::FixedClock;
use common::secret::SecretString;
use std::sync::Arc;
use token_auth::repositories::users::InMemoryUserDirectory;
use token_auth::services::token_service::TokenService;

/// The fixed signing secret.
pub fn test_secret() -> SecretString {
    SecretString::from(TEST_SECRET)
}

/// A clock pinned to `FIXED_NOW`, shared so tests can move it.
pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(FIXED_NOW))
}

/// A token service signing with the fixed secret and reading `clock`.
pub fn test_token_service(clock: Arc<FixedClock>) -> TokenService {
    TokenService::new(test_secret(), clock)
}

/// A token service with a different secret, for cross-secret checks.
pub fn other_token_service(clock: Arc<FixedClock>) -> TokenService {
    TokenService::new(SecretString::from(TEST_OTHER_SECRET), clock)
}

/// The demo directory (`admin/admin`, `example/temp`).
pub fn demo_directory() -> InMemoryUserDirectory {
    InMemoryUserDirectory::with_demo_users()
}
