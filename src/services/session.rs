//! Account and session management backed by process memory.
//!
//! ARCHITECTURE
//! ============
//! This host exists to hand the client a `{authenticated, role}` session;
//! accounts and tokens live in two maps guarded by `RwLock` and vanish on
//! restart. Credential verification is out of scope — any non-empty
//! password is accepted at the handler layer.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::RwLock;

use rand::Rng;
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Account payload shared with the client.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    /// Unique account identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email, lowercased.
    pub email: String,
    /// Role slug (`"teacher"`, `"student"`, `"parent"`), absent until the
    /// account picks one.
    pub role: Option<String>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("an account with that email already exists")]
    EmailTaken,
}

/// In-memory account registry and token table.
#[derive(Debug, Default)]
pub struct SessionStore {
    /// Accounts keyed by lowercase email.
    accounts: RwLock<HashMap<String, SessionUser>>,
    /// Session tokens mapped to the owning account's email.
    sessions: RwLock<HashMap<String, String>>,
}

impl SessionStore {
    /// Create an account and open a session for it.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::EmailTaken`] when the email is registered.
    pub fn signup(
        &self,
        name: &str,
        email: &str,
        role: Option<String>,
    ) -> Result<(String, SessionUser), AccountError> {
        let mut accounts = self.accounts.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        if accounts.contains_key(email) {
            return Err(AccountError::EmailTaken);
        }
        let user = SessionUser {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            email: email.to_owned(),
            role,
        };
        accounts.insert(email.to_owned(), user.clone());
        drop(accounts);

        Ok((self.open_session(email), user))
    }

    /// Open a session for an existing account, returning the token and the
    /// account, or `None` for unknown emails.
    pub fn login(&self, email: &str) -> Option<(String, SessionUser)> {
        let user = self
            .accounts
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(email)
            .cloned()?;
        Some((self.open_session(email), user))
    }

    /// Resolve a session token to its account.
    pub fn validate(&self, token: &str) -> Option<SessionUser> {
        let email = self
            .sessions
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(token)
            .cloned()?;
        self.accounts
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(&email)
            .cloned()
    }

    /// Record a role selection on the account behind `token` and return the
    /// updated account.
    pub fn set_role(&self, token: &str, role: &str) -> Option<SessionUser> {
        let email = self
            .sessions
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(token)
            .cloned()?;
        let mut accounts = self.accounts.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        let user = accounts.get_mut(&email)?;
        user.role = Some(role.to_owned());
        Some(user.clone())
    }

    /// Invalidate a session token. Unknown tokens are ignored.
    pub fn revoke(&self, token: &str) {
        self.sessions
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(token);
    }

    fn open_session(&self, email: &str) -> String {
        let token = generate_token();
        self.sessions
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(token.clone(), email.to_owned());
        token
    }
}
