//! Teacher dashboard — today's stats and the next lessons.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the teacher graph's initial destination; the graph guard sends
//! everyone else away before any teacher data renders.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::lesson_card::LessonCard;
use crate::components::page_header::PageHeader;
use crate::components::stat_tile::StatTile;
use crate::nav::GraphKind;
use crate::state::auth::SessionState;
use crate::state::roster::RosterState;
use crate::state::schedule::{self, ScheduleState};
use crate::util::auth::install_graph_guard;
use crate::util::clock;

const UPCOMING_PREVIEW: usize = 3;

#[component]
pub fn TeacherDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let schedule_state = expect_context::<RwSignal<ScheduleState>>();
    let roster = expect_context::<RwSignal<RosterState>>();
    let navigate = use_navigate();
    install_graph_guard(auth, GraphKind::Teacher, navigate);

    let week_count = move || {
        let lessons = schedule_state.get().lessons;
        schedule::count_within_days(&lessons, clock::now_ms(), 7).to_string()
    };
    let student_count = move || roster.get().items.len().to_string();
    let booked_hours = move || {
        let lessons = schedule_state.get().lessons;
        let upcoming = schedule::upcoming(&lessons, clock::now_ms());
        format!("{:.1}", f64::from(schedule::total_minutes(&upcoming)) / 60.0)
    };

    let next_up = move || {
        let lessons = schedule_state.get().lessons;
        schedule::upcoming(&lessons, clock::now_ms())
            .into_iter()
            .take(UPCOMING_PREVIEW)
            .collect::<Vec<_>>()
    };

    let greeting = move || {
        auth.get()
            .user
            .map_or_else(|| "Welcome back".to_owned(), |u| format!("Welcome back, {}", u.name))
    };

    view! {
        <div class="screen teacher-dashboard">
            <PageHeader title="Dashboard" subtitle=Signal::derive(greeting)/>
            <div class="stat-row">
                <StatTile label="Lessons this week" value=week_count()/>
                <StatTile label="Active students" value=student_count()/>
                <StatTile label="Hours booked" value=booked_hours()/>
            </div>
            <h2 class="screen__section-title">"Next up"</h2>
            <div class="screen__list">
                {move || {
                    next_up()
                        .into_iter()
                        .map(|lesson| view! { <LessonCard lesson=lesson/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
