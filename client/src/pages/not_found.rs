//! Fallback screen for paths outside every navigation graph.
//!
//! Surfaces the routing error instead of silently rendering nothing, and
//! offers the way back to the session's own graph.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::nav::{GraphKind, RoutingError, resolve_graph};
use crate::state::auth::SessionState;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let location = use_location();

    let error = move || {
        let graph = resolve_graph(&auth.get().session);
        RoutingError::UnknownDestination { kind: graph.kind, name: location.pathname.get() }
            .to_string()
    };
    let home = move || resolve_graph(&auth.get().session).initial().path.to_owned();
    let home_label = move || {
        if resolve_graph(&auth.get().session).kind == GraphKind::Auth {
            "Go to login"
        } else {
            "Back to your dashboard"
        }
    };

    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p class="not-found-page__error">{error}</p>
            <a class="btn not-found-page__home" href=home>
                {home_label}
            </a>
        </div>
    }
}
