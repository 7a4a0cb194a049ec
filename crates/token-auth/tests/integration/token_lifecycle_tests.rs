//! Signed token lifecycle: issue, decode, verify, age out.

use token_auth::services::token_service::{TokenError, TokenRejection};
use token_auth_test_utils::*;

// ============================================================================
// Issue and verify
// ============================================================================

#[test]
fn test_fresh_token_round_trips() {
    let clock = fixed_clock();
    let tokens = test_token_service(clock);

    let wire = tokens.create(TEST_SUBJECT_ALICE).unwrap();
    wire.assert_valid_token()
        .assert_for_subject(TEST_SUBJECT_ALICE)
        .assert_window(FIXED_NOW, FIXED_NOW + TEST_LIFETIME_SECONDS);

    let token = tokens.decode(&wire).unwrap();
    assert!(tokens.verify(&token));
    assert_eq!(token.issued_at(), Some(FIXED_NOW));
    assert_eq!(token.subject(), Some(TEST_SUBJECT_ALICE));

    // Re-serializing a decoded token reproduces the wire text
    assert_eq!(tokens.serialize(&token).unwrap(), wire);
}

#[test]
fn test_each_token_has_a_unique_id() {
    let tokens = test_token_service(fixed_clock());
    let a = tokens.decode(&tokens.create("alice").unwrap()).unwrap();
    let b = tokens.decode(&tokens.create("alice").unwrap()).unwrap();
    assert_ne!(a.id(), b.id());
}

/// Issued at 1700000000: still valid one second later, expired one second
/// past the hour.
#[test]
fn test_alice_token_ages_out_after_one_hour() {
    let clock = fixed_clock();
    let tokens = test_token_service(clock.clone());
    let token = tokens.decode(&tokens.create("alice").unwrap()).unwrap();

    clock.set(1_700_000_001);
    assert!(tokens.verify(&token));

    clock.set(1_700_003_601);
    assert!(!tokens.verify(&token));
}

// ============================================================================
// Window boundaries
// ============================================================================

#[test]
fn test_expiry_boundary_is_inclusive() {
    let clock = fixed_clock();
    let tokens = test_token_service(clock.clone());
    let token = tokens.decode(&tokens.create("alice").unwrap()).unwrap();

    clock.set(FIXED_NOW + TEST_LIFETIME_SECONDS);
    assert!(tokens.verify(&token), "valid at exactly exp");

    clock.advance(1);
    assert_eq!(
        tokens.validate(&token),
        Err(TokenRejection::Expired {
            expires_at: FIXED_NOW + TEST_LIFETIME_SECONDS,
            now: FIXED_NOW + TEST_LIFETIME_SECONDS + 1,
        })
    );
}

#[test]
fn test_not_yet_active_token_is_rejected_until_nbf() {
    let clock = fixed_clock();
    let tokens = test_token_service(clock.clone());
    let wire = TestTokenBuilder::new()
        .valid_from(FIXED_NOW + 60)
        .expires_at(FIXED_NOW + 120)
        .sign_with(&tokens);
    let token = tokens.decode(&wire).unwrap();

    assert!(matches!(
        tokens.validate(&token),
        Err(TokenRejection::NotYetActive { .. })
    ));

    clock.set(FIXED_NOW + 60);
    assert!(tokens.verify(&token), "valid at exactly nbf");
}

#[test]
fn test_token_without_window_is_rejected() {
    let tokens = test_token_service(fixed_clock());
    let wire = TestTokenBuilder::new().without_window().sign_with(&tokens);
    let token = tokens.decode(&wire).unwrap();

    assert_eq!(tokens.validate(&token), Err(TokenRejection::MissingWindow));
}

// ============================================================================
// Tampering and secrets
// ============================================================================

fn substitute(c: char) -> char {
    if c == 'A' {
        'B'
    } else {
        'A'
    }
}

/// Changing any single payload character must never yield an accepted token.
#[test]
fn test_tampering_any_payload_character_is_rejected() {
    let tokens = test_token_service(fixed_clock());
    let wire = tokens.create("alice").unwrap();

    let parts: Vec<&str> = wire.split('.').collect();
    let (header, payload, signature) = (parts[0], parts[1], parts[2]);

    for (i, original) in payload.char_indices() {
        let mut tampered_payload = payload.to_string();
        tampered_payload.replace_range(i..=i, &substitute(original).to_string());
        let tampered = format!("{header}.{tampered_payload}.{signature}");

        let accepted = tokens
            .decode(&tampered)
            .map(|token| tokens.verify(&token))
            .unwrap_or(false);
        assert!(!accepted, "tampered payload at index {i} was accepted");
    }
}

#[test]
fn test_tampered_signature_is_rejected() {
    let tokens = test_token_service(fixed_clock());
    let wire = tokens.create("alice").unwrap();

    let (unsigned, signature) = wire.rsplit_once('.').unwrap();
    let first = signature.chars().next().unwrap();
    let tampered = format!("{unsigned}.{}{}", substitute(first), &signature[1..]);

    let token = tokens.decode(&tampered).unwrap();
    assert!(!tokens.verify(&token));
}

#[test]
fn test_token_from_other_secret_is_rejected() {
    let clock = fixed_clock();
    let issuer = other_token_service(clock.clone());
    let verifier = test_token_service(clock);

    let token = verifier.decode(&issuer.create("alice").unwrap()).unwrap();
    assert_eq!(
        verifier.validate(&token),
        Err(TokenRejection::SignatureMismatch)
    );
}

#[test]
fn test_unsigned_model_is_rejected() {
    let tokens = test_token_service(fixed_clock());
    let token = TestTokenBuilder::new().build();
    assert_eq!(tokens.validate(&token), Err(TokenRejection::Unsigned));
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn test_malformed_inputs_fail_to_decode() {
    let tokens = test_token_service(fixed_clock());

    for input in ["", "abc", "abc.def", "!!!.@@@.###"] {
        assert!(tokens.decode(input).is_err(), "input {input:?} decoded");
    }

    assert!(matches!(tokens.decode("abc.def"), Err(TokenError::InvalidFormat)));
}

#[test]
fn test_extra_segments_are_ignored() {
    let tokens = test_token_service(fixed_clock());
    let wire = tokens.create("alice").unwrap();

    let token = tokens.decode(&format!("{wire}.trailing")).unwrap();
    assert!(tokens.verify(&token));
}
