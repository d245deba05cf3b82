//! Card for a tutor listing on the Find Tutors screen.

use leptos::prelude::*;

use crate::state::directory::Tutor;
use crate::util::format;

#[component]
pub fn TutorCard(tutor: Tutor) -> impl IntoView {
    let subjects = tutor
        .subjects
        .iter()
        .map(|s| s.label())
        .collect::<Vec<_>>()
        .join(" · ");
    let rate = format!("{}/h", format::money(tutor.hourly_rate_cents));
    let experience = format!("{} yrs", tutor.years_experience);
    view! {
        <div class="tutor-card">
            <div class="tutor-card__head">
                <span class="tutor-card__name">{tutor.name}</span>
                <span class="tutor-card__rating">{"★ "}{format::rating(tutor.rating)}</span>
            </div>
            <p class="tutor-card__subjects">{subjects}</p>
            <p class="tutor-card__bio">{tutor.bio}</p>
            <div class="tutor-card__meta">
                <span class="tutor-card__rate">{rate}</span>
                <span class="tutor-card__experience">{experience}</span>
            </div>
        </div>
    }
}
