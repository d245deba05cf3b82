//! Session value and its sign-in/sign-out transitions.
//!
//! DESIGN
//! ======
//! The role slot only exists on the signed-in variant, so "role present
//! implies authenticated" holds by construction instead of by convention.
//! Sessions are plain values threaded through context, never a singleton.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// The role a signed-in account acts as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Teacher,
    Student,
    Parent,
}

impl Role {
    /// Wire slug used by the auth API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Parent => "parent",
        }
    }

    /// Decode a wire slug. Unknown slugs decode to `None` — an account with
    /// a slug this client does not understand behaves as if no role were
    /// selected yet.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "teacher" => Some(Self::Teacher),
            "student" => Some(Self::Student),
            "parent" => Some(Self::Parent),
            _ => None,
        }
    }

    /// All roles, in the order the role-selection screen offers them.
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Teacher, Self::Student, Self::Parent]
    }
}

/// Authentication state of the current user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// No authenticated account; the initial state.
    #[default]
    SignedOut,
    /// An authenticated account, which may not have picked a role yet.
    SignedIn { role: Option<Role> },
}

impl Session {
    /// Transition taken on successful credential submission, carrying the
    /// chosen or detected role (none for accounts that have not picked one).
    #[must_use]
    pub fn sign_in(role: Option<Role>) -> Self {
        Self::SignedIn { role }
    }

    /// Transition taken on logout or account deletion.
    #[must_use]
    pub fn sign_out(self) -> Self {
        Self::SignedOut
    }

    /// Record a role selection. Signed-out sessions are unaffected — role
    /// selection is only reachable while signed in.
    #[must_use]
    pub fn with_role(self, role: Role) -> Self {
        match self {
            Self::SignedOut => Self::SignedOut,
            Self::SignedIn { .. } => Self::SignedIn { role: Some(role) },
        }
    }

    #[must_use]
    pub fn is_signed_in(self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }

    #[must_use]
    pub fn role(self) -> Option<Role> {
        match self {
            Self::SignedOut => None,
            Self::SignedIn { role } => role,
        }
    }
}
