//! Placeholder for empty list screens.

use leptos::prelude::*;

#[component]
pub fn EmptyState(message: &'static str) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state__message">{message}</p>
        </div>
    }
}
