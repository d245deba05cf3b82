//! Teacher profile screen.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::page_header::PageHeader;
use crate::components::profile_card::ProfileCard;
use crate::nav::GraphKind;
use crate::state::auth::SessionState;
use crate::util::auth::install_graph_guard;

#[component]
pub fn TeacherProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_graph_guard(auth, GraphKind::Teacher, navigate);

    view! {
        <div class="screen teacher-profile">
            <PageHeader title="Profile"/>
            <ProfileCard/>
        </div>
    }
}
