use super::*;
use crate::nav::Session;

fn state(session: Session) -> SessionState {
    SessionState { session, user: None, loading: false }
}

#[test]
fn loading_session_stays_put() {
    assert_eq!(redirect_target(&SessionState::default()), None);
}

#[test]
fn signed_out_visitor_may_browse_roles() {
    assert_eq!(redirect_target(&state(Session::SignedOut)), None);
}

#[test]
fn roleless_account_stays_to_pick() {
    assert_eq!(redirect_target(&state(Session::sign_in(None))), None);
}

#[test]
fn account_with_role_is_bounced_to_its_graph() {
    assert_eq!(redirect_target(&state(Session::sign_in(Some(Role::Teacher)))), Some("/teacher"));
    assert_eq!(redirect_target(&state(Session::sign_in(Some(Role::Parent)))), Some("/parent"));
}
