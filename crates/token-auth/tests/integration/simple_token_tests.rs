//! Simple token scheme against the demo directory.

use std::sync::Arc;
use token_auth::authorizer::{AuthError, Authorizer, SimpleTokenAuthorizer};
use token_auth::services::simple_token_service::SimpleTokenService;
use token_auth_test_utils::*;

fn authorizer() -> SimpleTokenAuthorizer {
    SimpleTokenAuthorizer::new(Arc::new(demo_directory()))
}

#[tokio::test]
async fn test_admin_admin_resolves_to_admin() {
    let token = SimpleTokenService::new().create(TEST_ADMIN_USERNAME, &TEST_ADMIN_PASSWORD.into());
    assert_eq!(token, TEST_ADMIN_SIMPLE_TOKEN);

    let identity = authorizer().authorize(Some(&token)).await.unwrap();
    assert_eq!(identity.username, TEST_ADMIN_USERNAME);
}

#[tokio::test]
async fn test_admin_wrong_password_is_denied() {
    let token = SimpleTokenService::new().create(TEST_ADMIN_USERNAME, &"wrong".into());
    let result = authorizer().authorize(Some(&token)).await;
    assert!(matches!(result, Err(AuthError::PasswordMismatch)));
}

#[tokio::test]
async fn test_example_user_resolves() {
    let identity = authorizer()
        .authorize(Some(TEST_EXAMPLE_SIMPLE_TOKEN))
        .await
        .unwrap();
    assert_eq!(identity.username, TEST_EXAMPLE_USERNAME);
}

#[tokio::test]
async fn test_password_of_other_user_is_denied() {
    let token = SimpleTokenService::new().create(TEST_ADMIN_USERNAME, &TEST_EXAMPLE_PASSWORD.into());
    assert!(authorizer().authorize(Some(&token)).await.is_err());
}

#[tokio::test]
async fn test_signed_token_is_not_a_simple_token() {
    let tokens = test_token_service(fixed_clock());
    let wire = tokens.create(TEST_ADMIN_USERNAME).unwrap();
    assert!(authorizer().authorize(Some(&wire)).await.is_err());
}
