//! Teacher roster — searchable student list.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::empty_state::EmptyState;
use crate::components::page_header::PageHeader;
use crate::components::student_row::StudentRow;
use crate::nav::GraphKind;
use crate::state::auth::SessionState;
use crate::state::roster::RosterState;
use crate::util::auth::install_graph_guard;

#[component]
pub fn TeacherStudentsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let roster = expect_context::<RwSignal<RosterState>>();
    let navigate = use_navigate();
    install_graph_guard(auth, GraphKind::Teacher, navigate);

    let filtered = move || roster.get().filtered();

    view! {
        <div class="screen teacher-students">
            <PageHeader title="Students"/>
            <input
                class="screen__search"
                type="search"
                placeholder="Search by name or subject"
                prop:value=move || roster.get().query
                on:input=move |ev| roster.update(|r| r.query = event_target_value(&ev))
            />
            <Show
                when=move || !filtered().is_empty()
                fallback=move || view! { <EmptyState message="No students match your search."/> }
            >
                <div class="screen__list">
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|record| view! { <StudentRow record=record/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
