//! Student dashboard — next lesson and booking stats.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::empty_state::EmptyState;
use crate::components::lesson_card::LessonCard;
use crate::components::page_header::PageHeader;
use crate::components::stat_tile::StatTile;
use crate::nav::GraphKind;
use crate::state::auth::SessionState;
use crate::state::directory::DirectoryState;
use crate::state::schedule::{self, ScheduleState};
use crate::util::auth::install_graph_guard;
use crate::util::clock;

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let schedule_state = expect_context::<RwSignal<ScheduleState>>();
    let directory = expect_context::<RwSignal<DirectoryState>>();
    let navigate = use_navigate();
    install_graph_guard(auth, GraphKind::Student, navigate);

    let week_count = move || {
        let lessons = schedule_state.get().lessons;
        schedule::count_within_days(&lessons, clock::now_ms(), 7).to_string()
    };
    let tutor_count = move || directory.get().items.len().to_string();
    let next = move || {
        let lessons = schedule_state.get().lessons;
        schedule::next_lesson(&lessons, clock::now_ms())
    };

    view! {
        <div class="screen student-dashboard">
            <PageHeader title="Dashboard"/>
            <div class="stat-row">
                <StatTile label="Lessons this week" value=week_count()/>
                <StatTile label="Tutors available" value=tutor_count()/>
            </div>
            <h2 class="screen__section-title">"Next lesson"</h2>
            <Show
                when=move || next().is_some()
                fallback=move || {
                    view! {
                        <EmptyState message="Nothing booked yet."/>
                        <a class="btn student-dashboard__cta" href="/student/tutors">
                            "Find a tutor"
                        </a>
                    }
                }
            >
                {move || next().map(|lesson| view! { <LessonCard lesson=lesson/> })}
            </Show>
        </div>
    }
}
