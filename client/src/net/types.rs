//! Wire DTOs for the auth API boundary.
//!
//! DESIGN
//! ======
//! The role travels as a free-form slug on the wire and is narrowed to the
//! `Role` enum at this boundary, so everything past `net` works with
//! exhaustive types only.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::nav::{Role, Session};

/// Account payload returned by `/api/auth/*` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Unique account identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Role slug (`"teacher"`, `"student"`, `"parent"`), absent until the
    /// account picks one.
    #[serde(default)]
    pub role: Option<String>,
}

impl SessionUser {
    /// The session this account represents. Unknown role slugs behave as
    /// "no role selected" so they route to role selection instead of
    /// rendering nothing.
    #[must_use]
    pub fn session(&self) -> Session {
        Session::sign_in(self.role.as_deref().and_then(Role::parse))
    }
}
