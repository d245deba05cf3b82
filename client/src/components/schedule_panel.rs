//! Upcoming/past lesson list shared by the per-role Schedule screens.

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::lesson_card::LessonCard;
use crate::state::schedule::{self, ScheduleState};
use crate::state::ui::{ScheduleTab, UiState};
use crate::util::clock;

#[component]
pub fn SchedulePanel() -> impl IntoView {
    let schedule_state = expect_context::<RwSignal<ScheduleState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let visible = move || {
        let now = clock::now_ms();
        let lessons = schedule_state.get().lessons;
        match ui.get().schedule_tab {
            ScheduleTab::Upcoming => schedule::upcoming(&lessons, now),
            ScheduleTab::Past => schedule::past(&lessons, now),
        }
    };

    view! {
        <div class="schedule-panel">
            <div class="schedule-panel__tabs">
                <button
                    class="schedule-panel__tab"
                    class:schedule-panel__tab--active=move || {
                        ui.get().schedule_tab == ScheduleTab::Upcoming
                    }
                    on:click=move |_| ui.update(|u| u.schedule_tab = ScheduleTab::Upcoming)
                >
                    "Upcoming"
                </button>
                <button
                    class="schedule-panel__tab"
                    class:schedule-panel__tab--active=move || {
                        ui.get().schedule_tab == ScheduleTab::Past
                    }
                    on:click=move |_| ui.update(|u| u.schedule_tab = ScheduleTab::Past)
                >
                    "Past"
                </button>
            </div>
            <Show
                when=move || !visible().is_empty()
                fallback=move || view! { <EmptyState message="No lessons here yet."/> }
            >
                <div class="schedule-panel__list">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|lesson| view! { <LessonCard lesson=lesson/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
