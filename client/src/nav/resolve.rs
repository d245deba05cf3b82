//! Graph resolution from session state.

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;

use super::graph::{self, RouteGraph};
use super::session::{Role, Session};

/// Map a session to the one navigation graph it may see.
///
/// Total over all session values: signed-out sessions always get the auth
/// graph, and a signed-in session that has not picked a role gets the
/// role-selection graph rather than an empty screen.
#[must_use]
pub fn resolve_graph(session: &Session) -> &'static RouteGraph {
    match *session {
        Session::SignedOut => &graph::AUTH,
        Session::SignedIn { role: None } => &graph::ROLE_SELECT,
        Session::SignedIn { role: Some(Role::Teacher) } => &graph::TEACHER,
        Session::SignedIn { role: Some(Role::Student) } => &graph::STUDENT,
        Session::SignedIn { role: Some(Role::Parent) } => &graph::PARENT,
    }
}
