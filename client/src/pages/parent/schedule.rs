//! Parent schedule — children's upcoming and past lessons.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::page_header::PageHeader;
use crate::components::schedule_panel::SchedulePanel;
use crate::nav::GraphKind;
use crate::state::auth::SessionState;
use crate::util::auth::install_graph_guard;

#[component]
pub fn ParentSchedulePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_graph_guard(auth, GraphKind::Parent, navigate);

    view! {
        <div class="screen parent-schedule">
            <PageHeader title="Schedule"/>
            <SchedulePanel/>
        </div>
    }
}
