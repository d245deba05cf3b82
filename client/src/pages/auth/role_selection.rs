//! Role selection page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable from two graphs: signed-out visitors browse roles before
//! signing up, and signed-in accounts without a role are forced here by
//! graph resolution. Accounts that already have a role are bounced to
//! their own graph.

#[cfg(test)]
#[path = "role_selection_test.rs"]
mod role_selection_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::nav::{GraphKind, Role, resolve_graph};
use crate::state::auth::SessionState;

pub(crate) fn redirect_target(state: &SessionState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    let graph = resolve_graph(&state.session);
    match graph.kind {
        GraphKind::Auth | GraphKind::RoleSelect => None,
        _ => Some(graph.initial().path),
    }
}

fn role_title(role: Role) -> &'static str {
    match role {
        Role::Teacher => "Teacher",
        Role::Student => "Student",
        Role::Parent => "Parent",
    }
}

fn role_blurb(role: Role) -> &'static str {
    match role {
        Role::Teacher => "Run your schedule, roster, and lesson notes.",
        Role::Student => "Find tutors and keep track of your lessons.",
        Role::Parent => "Follow your children's lessons and payments.",
    }
}

#[component]
pub fn RoleSelectionPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(target) = redirect_target(&auth.get()) {
            navigate(target, NavigateOptions::default());
        }
    });

    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_pick = Callback::new(move |role: Role| {
        if busy.get() {
            return;
        }
        if !auth.get_untracked().session.is_signed_in() {
            // Browsing while signed out: carry the choice into signup.
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&format!("/signup?role={}", role.as_str()));
                }
            }
            return;
        }
        busy.set(true);
        info.set("Saving your role...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::select_role(role.as_str()).await {
                Ok(user) => auth.set(SessionState::resolved(Some(user))),
                Err(e) => {
                    info.set(e);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = role;
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Who are you?"</h1>
                <p class="auth-card__subtitle">"Pick how you will use TutorLink"</p>
                <div class="role-cards">
                    {Role::all()
                        .into_iter()
                        .map(|role| {
                            view! {
                                <button
                                    class="role-card"
                                    disabled=move || busy.get()
                                    on:click=move |_| on_pick.run(role)
                                >
                                    <span class="role-card__title">{role_title(role)}</span>
                                    <span class="role-card__blurb">{role_blurb(role)}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
