use super::*;

// =============================================================================
// bytes_to_hex / generate_token
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionStore
// =============================================================================

#[test]
fn signup_then_validate_round_trips() {
    let store = SessionStore::default();
    let (token, user) =
        store.signup("Dana", "dana@example.com", Some("teacher".to_owned())).expect("signup");
    assert_eq!(user.role.as_deref(), Some("teacher"));

    let validated = store.validate(&token).expect("session valid");
    assert_eq!(validated.id, user.id);
    assert_eq!(validated.email, "dana@example.com");
}

#[test]
fn signup_duplicate_email_is_rejected() {
    let store = SessionStore::default();
    store.signup("Dana", "dana@example.com", None).expect("first signup");
    assert!(matches!(
        store.signup("Other", "dana@example.com", None),
        Err(AccountError::EmailTaken)
    ));
}

#[test]
fn login_unknown_email_is_none() {
    let store = SessionStore::default();
    assert!(store.login("ghost@example.com").is_none());
}

#[test]
fn login_opens_fresh_session_for_existing_account() {
    let store = SessionStore::default();
    let (first_token, user) = store.signup("Dana", "dana@example.com", None).expect("signup");
    let (second_token, same_user) = store.login("dana@example.com").expect("login");
    assert_ne!(first_token, second_token);
    assert_eq!(user.id, same_user.id);
    // Both sessions stay valid.
    assert!(store.validate(&first_token).is_some());
    assert!(store.validate(&second_token).is_some());
}

#[test]
fn validate_unknown_token_is_none() {
    let store = SessionStore::default();
    assert!(store.validate("not-a-token").is_none());
}

#[test]
fn set_role_updates_account_for_all_sessions() {
    let store = SessionStore::default();
    let (token, user) = store.signup("Dana", "dana@example.com", None).expect("signup");
    assert_eq!(user.role, None);

    let updated = store.set_role(&token, "parent").expect("role set");
    assert_eq!(updated.role.as_deref(), Some("parent"));
    assert_eq!(store.validate(&token).expect("still valid").role.as_deref(), Some("parent"));
}

#[test]
fn set_role_with_revoked_token_is_none() {
    let store = SessionStore::default();
    let (token, _) = store.signup("Dana", "dana@example.com", None).expect("signup");
    store.revoke(&token);
    assert!(store.set_role(&token, "parent").is_none());
}

#[test]
fn revoke_invalidates_only_that_token() {
    let store = SessionStore::default();
    let (first, _) = store.signup("Dana", "dana@example.com", None).expect("signup");
    let (second, _) = store.login("dana@example.com").expect("login");
    store.revoke(&first);
    assert!(store.validate(&first).is_none());
    assert!(store.validate(&second).is_some());
}
