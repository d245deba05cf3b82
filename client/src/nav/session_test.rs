use super::*;

// =============================================================
// Role parsing
// =============================================================

#[test]
fn role_parse_known_slugs() {
    assert_eq!(Role::parse("teacher"), Some(Role::Teacher));
    assert_eq!(Role::parse("student"), Some(Role::Student));
    assert_eq!(Role::parse("parent"), Some(Role::Parent));
}

#[test]
fn role_parse_trims_and_ignores_case() {
    assert_eq!(Role::parse("  Teacher "), Some(Role::Teacher));
    assert_eq!(Role::parse("PARENT"), Some(Role::Parent));
}

#[test]
fn role_parse_garbage_is_none() {
    assert_eq!(Role::parse(""), None);
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse("teacher "), Some(Role::Teacher));
    assert_eq!(Role::parse("teachers"), None);
}

#[test]
fn role_as_str_round_trips() {
    for role in Role::all() {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

// =============================================================
// Session transitions
// =============================================================

#[test]
fn session_default_is_signed_out() {
    assert_eq!(Session::default(), Session::SignedOut);
    assert!(!Session::default().is_signed_in());
    assert_eq!(Session::default().role(), None);
}

#[test]
fn sign_in_carries_role() {
    let session = Session::sign_in(Some(Role::Parent));
    assert!(session.is_signed_in());
    assert_eq!(session.role(), Some(Role::Parent));
}

#[test]
fn sign_in_without_role() {
    let session = Session::sign_in(None);
    assert!(session.is_signed_in());
    assert_eq!(session.role(), None);
}

#[test]
fn sign_out_resets_to_signed_out() {
    let session = Session::sign_in(Some(Role::Teacher)).sign_out();
    assert_eq!(session, Session::SignedOut);
    assert_eq!(session.role(), None);
}

#[test]
fn with_role_fills_empty_slot() {
    let session = Session::sign_in(None).with_role(Role::Student);
    assert_eq!(session.role(), Some(Role::Student));
}

#[test]
fn with_role_replaces_existing_role() {
    let session = Session::sign_in(Some(Role::Student)).with_role(Role::Parent);
    assert_eq!(session.role(), Some(Role::Parent));
}

#[test]
fn with_role_is_noop_while_signed_out() {
    assert_eq!(Session::SignedOut.with_role(Role::Teacher), Session::SignedOut);
}
