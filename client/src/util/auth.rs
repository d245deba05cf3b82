//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page requires one graph kind and applies identical redirect
//! behavior: a session that resolves elsewhere is sent to the initial
//! destination of its own graph, so no role can reach another role's
//! screens and signed-out users always land on login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::nav::{GraphKind, resolve_graph};
use crate::state::auth::SessionState;

/// Where to send a session that is not allowed on a page requiring
/// `required`, or `None` if it may stay. Holds off while the initial
/// session fetch is still loading.
#[must_use]
pub fn guard_redirect(state: &SessionState, required: GraphKind) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    let graph = resolve_graph(&state.session);
    (graph.kind != required).then(|| graph.initial().path)
}

/// Install the redirect as an effect; runs whenever session state changes.
pub fn install_graph_guard<F>(auth: RwSignal<SessionState>, required: GraphKind, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = guard_redirect(&auth.get(), required) {
            navigate(target, NavigateOptions::default());
        }
    });
}
