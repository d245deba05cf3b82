use super::*;
use crate::nav::graph::GraphKind;

// =============================================================
// Signed-out sessions
// =============================================================

#[test]
fn signed_out_resolves_to_auth_graph() {
    let graph = resolve_graph(&Session::SignedOut);
    assert_eq!(graph.kind, GraphKind::Auth);
}

#[test]
fn default_session_resolves_to_auth_graph() {
    assert_eq!(resolve_graph(&Session::default()).kind, GraphKind::Auth);
}

// =============================================================
// Signed-in sessions
// =============================================================

#[test]
fn each_role_resolves_to_its_own_graph() {
    let cases = [
        (Role::Teacher, GraphKind::Teacher),
        (Role::Student, GraphKind::Student),
        (Role::Parent, GraphKind::Parent),
    ];
    for (role, kind) in cases {
        let graph = resolve_graph(&Session::sign_in(Some(role)));
        assert_eq!(graph.kind, kind);
    }
}

#[test]
fn signed_in_without_role_falls_back_to_role_selection() {
    let graph = resolve_graph(&Session::sign_in(None));
    assert_eq!(graph.kind, GraphKind::RoleSelect);
    assert!(!graph.destinations().is_empty());
    assert_eq!(graph.initial().name, "RoleSelection");
}

// =============================================================
// Idempotence and state transitions
// =============================================================

#[test]
fn resolution_is_idempotent() {
    let session = Session::sign_in(Some(Role::Parent));
    let first = resolve_graph(&session);
    let second = resolve_graph(&session);
    assert!(std::ptr::eq(first, second));
    assert_eq!(
        first.destinations().iter().map(|d| d.name).collect::<Vec<_>>(),
        second.destinations().iter().map(|d| d.name).collect::<Vec<_>>(),
    );
}

#[test]
fn logout_from_any_role_lands_on_auth_graph() {
    for role in Role::all() {
        let session = Session::sign_in(Some(role)).sign_out();
        assert_eq!(resolve_graph(&session).kind, GraphKind::Auth);
    }
}

#[test]
fn role_selection_moves_fallback_session_to_role_graph() {
    let session = Session::sign_in(None);
    assert_eq!(resolve_graph(&session).kind, GraphKind::RoleSelect);
    let session = session.with_role(Role::Student);
    assert_eq!(resolve_graph(&session).kind, GraphKind::Student);
}

// =============================================================
// Spec scenarios
// =============================================================

#[test]
fn signed_out_scenario_shows_auth_destinations() {
    let graph = resolve_graph(&Session::SignedOut);
    let names: Vec<_> = graph.destinations().iter().map(|d| d.name).collect();
    assert_eq!(names, ["Login", "SignUp", "ForgotPassword", "RoleSelection"]);
}

#[test]
fn parent_scenario_shows_parent_destinations() {
    let graph = resolve_graph(&Session::sign_in(Some(Role::Parent)));
    let names: Vec<_> = graph.destinations().iter().map(|d| d.name).collect();
    assert_eq!(
        names,
        ["ParentDashboard", "ParentSchedule", "ParentPayments", "ParentProfile", "ParentSettings"]
    );
}
