//! Issued tokens validate under an independent HS256 implementation.

use common::clock::SystemClock;
use common::secret::SecretString;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::sync::Arc;
use token_auth::services::token_service::TokenService;
use token_auth_test_utils::{TEST_OTHER_SECRET, TEST_SECRET};

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
    nbf: i64,
    jti: String,
}

fn wall_clock_service() -> TokenService {
    TokenService::new(SecretString::from(TEST_SECRET), Arc::new(SystemClock))
}

#[test]
fn test_issued_token_validates_under_jsonwebtoken() {
    let wire = wall_clock_service().create("alice").unwrap();

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_nbf = true;

    let data = decode::<Claims>(
        &wire,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &validation,
    )
    .expect("token should validate under jsonwebtoken");

    assert_eq!(data.header.alg, Algorithm::HS256);
    assert_eq!(data.header.typ.as_deref(), Some("JWT"));
    assert_eq!(data.claims.sub, "alice");
    assert_eq!(data.claims.exp - data.claims.nbf, 3600);
    assert!(!data.claims.jti.is_empty());
}

#[test]
fn test_jsonwebtoken_rejects_wrong_secret() {
    let wire = wall_clock_service().create("alice").unwrap();

    let result = decode::<Claims>(
        &wire,
        &DecodingKey::from_secret(TEST_OTHER_SECRET.as_bytes()),
        &Validation::new(Algorithm::HS256),
    );
    assert!(result.is_err());
}
