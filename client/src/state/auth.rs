//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and the tab bar read this to decide which navigation graph
//! is active; auth pages write it after collaborator calls succeed.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::nav::Session;
use crate::net::types::SessionUser;

/// Current session plus the account it belongs to.
///
/// `loading` is true from app start until the initial `/api/auth/me` fetch
/// settles; guards hold off redirecting while it is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub session: Session,
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { session: Session::SignedOut, user: None, loading: true }
    }
}

impl SessionState {
    /// State after the auth collaborator answered: the session is derived
    /// from the account so the two can never disagree.
    #[must_use]
    pub fn resolved(user: Option<SessionUser>) -> Self {
        let session = user.as_ref().map_or(Session::SignedOut, SessionUser::session);
        Self { session, user, loading: false }
    }

    /// State after logout.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::resolved(None)
    }
}
