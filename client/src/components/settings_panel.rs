//! Settings body shared by the per-role Settings screens: theme toggle and
//! logout.

use leptos::prelude::*;

use crate::state::auth::SessionState;
use crate::state::ui::UiState;

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_dark_toggle = move |_| {
        let current = ui.get().dark_mode;
        let next = crate::util::dark_mode::toggle(current);
        ui.update(|u| u.dark_mode = next);
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.set(SessionState::signed_out());
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = auth;
        }
    };

    view! {
        <div class="settings-panel">
            <div class="settings-panel__row">
                <span class="settings-panel__label">"Dark mode"</span>
                <button class="btn settings-panel__dark-toggle" on:click=on_dark_toggle>
                    {move || if ui.get().dark_mode { "On" } else { "Off" }}
                </button>
            </div>
            <div class="settings-panel__row">
                <span class="settings-panel__label">"Account"</span>
                <button class="btn settings-panel__logout" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </div>
    }
}
