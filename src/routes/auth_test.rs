use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_EB_INVALID_7731__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_XYZ_17__"), None);
}

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  Dana@Example.COM "), Ok("dana@example.com".to_owned()));
}

#[test]
fn normalize_email_rejects_empty() {
    assert!(matches!(normalize_email("   "), Err(ApiError::InvalidEmail)));
}

#[test]
fn normalize_email_rejects_missing_at() {
    assert!(matches!(normalize_email("example.com"), Err(ApiError::InvalidEmail)));
}

// =============================================================================
// validate_role_slug
// =============================================================================

#[test]
fn validate_role_slug_accepts_known_roles() {
    assert_eq!(validate_role_slug("teacher"), Ok("teacher".to_owned()));
    assert_eq!(validate_role_slug("Student"), Ok("student".to_owned()));
    assert_eq!(validate_role_slug(" parent "), Ok("parent".to_owned()));
}

#[test]
fn validate_role_slug_rejects_unknown() {
    assert!(matches!(validate_role_slug("admin"), Err(ApiError::UnknownRole)));
    assert!(matches!(validate_role_slug(""), Err(ApiError::UnknownRole)));
}

// =============================================================================
// ApiError status mapping
// =============================================================================

#[test]
fn api_error_statuses() {
    assert_eq!(ApiError::InvalidEmail.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::PasswordTooShort.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ApiError::UnknownRole.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(ApiError::Account(AccountError::EmailTaken).status(), StatusCode::CONFLICT);
}
