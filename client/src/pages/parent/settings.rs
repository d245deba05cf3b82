//! Parent settings screen.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::page_header::PageHeader;
use crate::components::settings_panel::SettingsPanel;
use crate::nav::GraphKind;
use crate::state::auth::SessionState;
use crate::util::auth::install_graph_guard;

#[component]
pub fn ParentSettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_graph_guard(auth, GraphKind::Parent, navigate);

    view! {
        <div class="screen parent-settings">
            <PageHeader title="Settings"/>
            <SettingsPanel/>
        </div>
    }
}
