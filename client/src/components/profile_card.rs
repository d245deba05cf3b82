//! Account summary shared by the per-role Profile screens.

#[cfg(test)]
#[path = "profile_card_test.rs"]
mod profile_card_test;

use leptos::prelude::*;

use crate::nav::Role;
use crate::state::auth::SessionState;

pub(crate) fn role_label(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Teacher) => "Teacher",
        Some(Role::Student) => "Student",
        Some(Role::Parent) => "Parent",
        None => "No role selected",
    }
}

/// Name, email, and role of the signed-in account.
#[component]
pub fn ProfileCard() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let name = move || auth.get().user.map(|u| u.name).unwrap_or_default();
    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();
    let role = move || role_label(auth.get().session.role());

    view! {
        <div class="profile-card">
            <div class="profile-card__avatar" aria-hidden="true">
                {move || name().chars().next().map(String::from).unwrap_or_default()}
            </div>
            <span class="profile-card__name">{name}</span>
            <span class="profile-card__email">{email}</span>
            <span class="profile-card__role">{role}</span>
        </div>
    }
}
