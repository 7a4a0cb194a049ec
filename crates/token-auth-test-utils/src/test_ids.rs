//! Fixed test constants for deterministic tests
//!
//! Time-dependent tests pin the clock to `FIXED_NOW` instead of reading the
//! wall clock, so boundary checks land on exact seconds.

/// Pinned "now" for time-dependent tests (2023-11-14T22:13:20Z).
pub const FIXED_NOW: i64 = 1_700_000_000;

/// Default token lifetime in seconds.
pub const TEST_LIFETIME_SECONDS: i64 = 3600;

// Signing secrets
pub const TEST_SECRET: &str = "my_secret_key";
pub const TEST_OTHER_SECRET: &str = "not_my_secret_key";

// Demo users
pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "admin";
pub const TEST_EXAMPLE_USERNAME: &str = "example";
pub const TEST_EXAMPLE_PASSWORD: &str = "temp";

// Simple tokens for the demo users
pub const TEST_ADMIN_SIMPLE_TOKEN: &str = "YWRtaW46YWRtaW4=";
pub const TEST_EXAMPLE_SIMPLE_TOKEN: &str = "ZXhhbXBsZTp0ZW1w";

// Subject not present in the demo directory
pub const TEST_SUBJECT_ALICE: &str = "alice";
