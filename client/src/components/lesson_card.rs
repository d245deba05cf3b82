//! Card for a single lesson on schedule and dashboard screens.

use leptos::prelude::*;

use crate::state::schedule::Lesson;
use crate::util::format;

#[component]
pub fn LessonCard(lesson: Lesson) -> impl IntoView {
    let mode = if lesson.online { "Online" } else { "In person" };
    view! {
        <div class="lesson-card">
            <div class="lesson-card__main">
                <span class="lesson-card__subject">{lesson.subject}</span>
                <span class="lesson-card__with">{lesson.with_name}</span>
            </div>
            <div class="lesson-card__meta">
                <span class="lesson-card__when">{lesson.when_label}</span>
                <span class="lesson-card__duration">{format::duration(lesson.duration_min)}</span>
                <span class="lesson-card__mode">{mode}</span>
            </div>
        </div>
    }
}
