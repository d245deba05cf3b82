use super::*;

#[test]
fn login_failed_message_unauthorized_is_friendly() {
    assert_eq!(login_failed_message(401), "Email or password not recognized.");
}

#[test]
fn login_failed_message_other_statuses_include_code() {
    assert_eq!(login_failed_message(500), "login failed: 500");
}

#[test]
fn signup_failed_message_conflict_is_friendly() {
    assert_eq!(signup_failed_message(409), "An account with that email already exists.");
}

#[test]
fn signup_failed_message_other_statuses_include_code() {
    assert_eq!(signup_failed_message(422), "signup failed: 422");
}

#[test]
fn role_update_failed_message_includes_code() {
    assert_eq!(role_update_failed_message(403), "role update failed: 403");
}

#[test]
fn reset_request_failed_message_includes_code() {
    assert_eq!(reset_request_failed_message(502), "reset request failed: 502");
}
