//! Parent dashboard — children overview and the next lesson.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::empty_state::EmptyState;
use crate::components::lesson_card::LessonCard;
use crate::components::page_header::PageHeader;
use crate::data::{self, ChildSummary};
use crate::nav::GraphKind;
use crate::state::auth::SessionState;
use crate::state::schedule::{self, ScheduleState};
use crate::util::auth::install_graph_guard;
use crate::util::clock;

#[component]
fn ChildCard(child: ChildSummary) -> impl IntoView {
    view! {
        <div class="child-card">
            <span class="child-card__name">{child.name}</span>
            <span class="child-card__grade">{child.grade_level}</span>
            <span class="child-card__subject">
                {child.subject}
                " with "
                {child.tutor_name}
            </span>
        </div>
    }
}

#[component]
pub fn ParentDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let schedule_state = expect_context::<RwSignal<ScheduleState>>();
    let navigate = use_navigate();
    install_graph_guard(auth, GraphKind::Parent, navigate);

    let children = data::mock_children();
    let next = move || {
        let lessons = schedule_state.get().lessons;
        schedule::next_lesson(&lessons, clock::now_ms())
    };

    view! {
        <div class="screen parent-dashboard">
            <PageHeader title="Dashboard"/>
            <h2 class="screen__section-title">"Your children"</h2>
            <div class="screen__list">
                {children
                    .into_iter()
                    .map(|child| view! { <ChildCard child=child/> })
                    .collect::<Vec<_>>()}
            </div>
            <h2 class="screen__section-title">"Next lesson"</h2>
            <Show
                when=move || next().is_some()
                fallback=move || view! { <EmptyState message="No lessons booked."/> }
            >
                {move || next().map(|lesson| view! { <LessonCard lesson=lesson/> })}
            </Show>
        </div>
    }
}
