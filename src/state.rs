//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::services::session::SessionStore;

#[derive(Clone, Default)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
