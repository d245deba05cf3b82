use super::*;
use crate::nav::{Role, Session};

fn state(session: Session) -> SessionState {
    SessionState { session, user: None, loading: false }
}

#[test]
fn loading_sessions_never_redirect() {
    let loading = SessionState::default();
    assert!(loading.loading);
    assert_eq!(guard_redirect(&loading, GraphKind::Teacher), None);
    assert_eq!(guard_redirect(&loading, GraphKind::Auth), None);
}

#[test]
fn signed_out_on_role_page_goes_to_login() {
    let s = state(Session::SignedOut);
    assert_eq!(guard_redirect(&s, GraphKind::Teacher), Some("/login"));
    assert_eq!(guard_redirect(&s, GraphKind::Parent), Some("/login"));
}

#[test]
fn signed_out_on_auth_page_stays() {
    assert_eq!(guard_redirect(&state(Session::SignedOut), GraphKind::Auth), None);
}

#[test]
fn matching_role_stays() {
    let s = state(Session::sign_in(Some(Role::Student)));
    assert_eq!(guard_redirect(&s, GraphKind::Student), None);
}

#[test]
fn other_roles_page_bounces_to_own_graph_initial() {
    let s = state(Session::sign_in(Some(Role::Teacher)));
    assert_eq!(guard_redirect(&s, GraphKind::Parent), Some("/teacher"));
    assert_eq!(guard_redirect(&s, GraphKind::Student), Some("/teacher"));
}

#[test]
fn signed_in_user_on_auth_page_bounces_to_own_graph() {
    let s = state(Session::sign_in(Some(Role::Parent)));
    assert_eq!(guard_redirect(&s, GraphKind::Auth), Some("/parent"));
}

#[test]
fn roleless_session_is_sent_to_role_selection() {
    let s = state(Session::sign_in(None));
    assert_eq!(guard_redirect(&s, GraphKind::Teacher), Some("/select-role"));
    assert_eq!(guard_redirect(&s, GraphKind::RoleSelect), None);
}
