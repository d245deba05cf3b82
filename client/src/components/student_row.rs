//! Roster row for the teacher's Students screen.

use leptos::prelude::*;

use crate::state::roster::StudentRecord;

#[component]
pub fn StudentRow(record: StudentRecord) -> impl IntoView {
    let progress = format!("{} lessons", record.lessons_completed);
    view! {
        <div class="student-row">
            <span class="student-row__name">{record.name}</span>
            <span class="student-row__subject">{record.subject}</span>
            <span class="student-row__grade">{record.grade_level}</span>
            <span class="student-row__progress">{progress}</span>
        </div>
    }
}
