//! End-to-end HTTP flows against a spawned server.

use reqwest::StatusCode;
use token_auth::models::IdentityResponse;
use token_auth_test_utils::*;

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_returns_ok() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;

    let response = server
        .client()
        .get(format!("{}/health", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await?, "OK");
    Ok(())
}

// ============================================================================
// Signed token flow
// ============================================================================

#[tokio::test]
async fn test_login_then_whoami_jwt() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;

    let jwt = server.login(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD).await?;
    jwt.assert_valid_token()
        .assert_for_subject(TEST_ADMIN_USERNAME)
        .assert_window(FIXED_NOW, FIXED_NOW + TEST_LIFETIME_SECONDS);

    let response = server
        .whoami("jwt", Some(&format!("Bearer {jwt}")))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let identity: IdentityResponse = response.json().await?;
    assert_eq!(identity.username, TEST_ADMIN_USERNAME);
    Ok(())
}

#[tokio::test]
async fn test_jwt_expires_when_clock_moves_past_exp() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;
    let jwt = server.login(TEST_EXAMPLE_USERNAME, TEST_EXAMPLE_PASSWORD).await?;

    server.clock().set(FIXED_NOW + TEST_LIFETIME_SECONDS);
    assert_eq!(server.whoami("jwt", Some(&jwt)).await?.status(), StatusCode::OK);

    server.clock().advance(1);
    assert_eq!(
        server.whoami("jwt", Some(&jwt)).await?.status(),
        StatusCode::UNAUTHORIZED
    );
    Ok(())
}

#[tokio::test]
async fn test_login_with_bad_password_is_bad_request() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;

    let response = server
        .client()
        .post(format!("{}/auth/jwt", server.url()))
        .json(&serde_json::json!({ "username": "admin", "password": "wrong" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    Ok(())
}

#[tokio::test]
async fn test_login_with_missing_password_is_bad_request() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;

    let response = server
        .client()
        .post(format!("{}/auth/jwt", server.url()))
        .json(&serde_json::json!({ "username": "admin" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

// ============================================================================
// Simple token flow
// ============================================================================

#[tokio::test]
async fn test_whoami_simple() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;

    let response = server
        .whoami("simple", Some(TEST_EXAMPLE_SIMPLE_TOKEN))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let identity: IdentityResponse = response.json().await?;
    assert_eq!(identity.username, TEST_EXAMPLE_USERNAME);
    Ok(())
}

#[tokio::test]
async fn test_unauthorized_body_hides_reason() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;

    let response = server.whoami("simple", Some("YWRtaW46d3Jvbmc=")).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.text().await?;
    assert!(!body.contains("password"), "deny reason leaked: {body}");
    Ok(())
}

#[tokio::test]
async fn test_whoami_without_credentials_is_unauthorized() -> Result<(), anyhow::Error> {
    let server = TestAuthServer::spawn().await?;

    for scheme in ["jwt", "simple"] {
        let response = server.whoami(scheme, None).await?;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "scheme {scheme}");
    }
    Ok(())
}
