//! Screen title header shared by all role pages.

use leptos::prelude::*;

#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional, into)] subtitle: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">{title}</h1>
            {subtitle.map(|s| view! { <p class="page-header__subtitle">{move || s.get()}</p> })}
        </header>
    }
}
