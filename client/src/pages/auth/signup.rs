//! Signup page: name, email, password, and an optional role choice.
//!
//! A role picked here skips the role-selection step after the account is
//! created; "decide later" routes through the role-selection fallback.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::nav::{GraphKind, Role};
use crate::state::auth::SessionState;
use crate::util::auth::install_graph_guard;

const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok((name.to_owned(), email.to_owned(), password.to_owned()))
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_graph_guard(auth, GraphKind::Auth, navigate);

    // Role selection can preseed the picker via `/signup?role=teacher`.
    let query = use_query_map();
    let preselected = query.with_untracked(|q| q.get("role").and_then(|r| Role::parse(&r)));

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(preselected);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, email_value, password_value) =
            match validate_signup_input(&name.get(), &email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        let role_value = role.get();
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let slug = role_value.map(Role::as_str);
            match crate::net::api::signup(&name_value, &email_value, &password_value, slug).await {
                Ok(user) => auth.set(SessionState::resolved(Some(user))),
                Err(e) => {
                    info.set(e);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, email_value, password_value, role_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Join TutorLink"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <div class="auth-role-picker">
                        {Role::all()
                            .into_iter()
                            .map(|candidate| {
                                view! {
                                    <button
                                        type="button"
                                        class="auth-role-chip"
                                        class:auth-role-chip--active=move || {
                                            role.get() == Some(candidate)
                                        }
                                        on:click=move |_| role.set(Some(candidate))
                                    >
                                        {candidate.as_str()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <button
                            type="button"
                            class="auth-role-chip"
                            class:auth-role-chip--active=move || role.get().is_none()
                            on:click=move |_| role.set(None)
                        >
                            "decide later"
                        </button>
                    </div>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-links">
                    <a class="auth-link" href="/login">
                        "Already have an account? Log in"
                    </a>
                </div>
            </div>
        </div>
    }
}
