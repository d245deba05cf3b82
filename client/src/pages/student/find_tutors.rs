//! Tutor directory with subject chips and text search.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::empty_state::EmptyState;
use crate::components::page_header::PageHeader;
use crate::components::tutor_card::TutorCard;
use crate::nav::GraphKind;
use crate::state::auth::SessionState;
use crate::state::directory::{DirectoryState, Subject};
use crate::util::auth::install_graph_guard;

#[component]
pub fn FindTutorsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let directory = expect_context::<RwSignal<DirectoryState>>();
    let navigate = use_navigate();
    install_graph_guard(auth, GraphKind::Student, navigate);

    let filtered = move || directory.get().filtered();

    let on_chip = Callback::new(move |subject: Subject| {
        directory.update(|d| {
            // Tapping the active chip clears the filter.
            d.subject = if d.subject == Some(subject) { None } else { Some(subject) };
        });
    });

    view! {
        <div class="screen find-tutors">
            <PageHeader title="Find Tutors"/>
            <input
                class="screen__search"
                type="search"
                placeholder="Search by name or bio"
                prop:value=move || directory.get().query
                on:input=move |ev| directory.update(|d| d.query = event_target_value(&ev))
            />
            <div class="subject-chips">
                {Subject::all()
                    .into_iter()
                    .map(|subject| {
                        view! {
                            <button
                                class="subject-chip"
                                class:subject-chip--active=move || {
                                    directory.get().subject == Some(subject)
                                }
                                on:click=move |_| on_chip.run(subject)
                            >
                                {subject.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Show
                when=move || !filtered().is_empty()
                fallback=move || view! { <EmptyState message="No tutors match your filters."/> }
            >
                <div class="screen__list">
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|tutor| view! { <TutorCard tutor=tutor/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
