//! Bottom tab bar driven by the active navigation graph.
//!
//! DESIGN
//! ======
//! The bar never hardcodes destinations; it renders whatever graph the
//! current session resolves to, so membership and order stay defined in
//! one place (`nav::graph`).

#[cfg(test)]
#[path = "tab_bar_test.rs"]
mod tab_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::nav::resolve_graph;
use crate::state::auth::SessionState;

/// Whether a destination path is the one currently shown.
pub(crate) fn is_active(current_path: &str, dest_path: &str) -> bool {
    current_path.trim_end_matches('/') == dest_path
}

/// Glyph for a destination icon identifier.
pub(crate) fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "home" => "⌂",
        "calendar" => "▦",
        "users" => "⚇",
        "user" => "◉",
        "gear" => "⚙",
        "search" => "⌕",
        "card" => "▤",
        "key" => "⚿",
        "user-plus" => "✚",
        "lifebuoy" => "◍",
        "switch" => "⇄",
        _ => "•",
    }
}

/// Tab bar listing the active graph's destinations in configured order.
#[component]
pub fn TabBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let location = use_location();

    view! {
        <nav class="tab-bar">
            {move || {
                let current = location.pathname.get();
                resolve_graph(&auth.get().session)
                    .destinations()
                    .iter()
                    .map(|dest| {
                        let active = is_active(&current, dest.path);
                        view! {
                            <a
                                class="tab-bar__item"
                                class:tab-bar__item--active=active
                                href=dest.path
                            >
                                <span class="tab-bar__icon" aria-hidden="true">
                                    {icon_glyph(dest.icon)}
                                </span>
                                <span class="tab-bar__label">{dest.label}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
