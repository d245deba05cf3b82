//! In-memory fixture data backing the screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The marketplace backend is out of scope; every list screen renders from
//! these vectors. Lesson times are offsets from the caller's "now" so the
//! upcoming/past split stays meaningful whenever the app runs.

use crate::state::directory::{Subject, Tutor};
use crate::state::payments::{PaymentRecord, PaymentStatus};
use crate::state::roster::StudentRecord;
use crate::state::schedule::Lesson;

const HOUR_MS: i64 = 60 * 60 * 1000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// A child as shown on the parent dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildSummary {
    pub name: String,
    pub grade_level: String,
    pub subject: String,
    pub tutor_name: String,
}

#[must_use]
pub fn mock_lessons(now_ts: i64) -> Vec<Lesson> {
    vec![
        Lesson {
            id: "l-1".to_owned(),
            subject: "Algebra II".to_owned(),
            with_name: "Maya Chen".to_owned(),
            when_label: "Today 4:00 PM".to_owned(),
            start_ts: now_ts + 2 * HOUR_MS,
            duration_min: 60,
            online: true,
        },
        Lesson {
            id: "l-2".to_owned(),
            subject: "Chemistry".to_owned(),
            with_name: "Leo Park".to_owned(),
            when_label: "Tomorrow 10:00 AM".to_owned(),
            start_ts: now_ts + DAY_MS,
            duration_min: 45,
            online: false,
        },
        Lesson {
            id: "l-3".to_owned(),
            subject: "Essay Writing".to_owned(),
            with_name: "Ana Silva".to_owned(),
            when_label: "Thu 5:30 PM".to_owned(),
            start_ts: now_ts + 3 * DAY_MS,
            duration_min: 75,
            online: true,
        },
        Lesson {
            id: "l-4".to_owned(),
            subject: "Algebra II".to_owned(),
            with_name: "Maya Chen".to_owned(),
            when_label: "Last Mon 4:00 PM".to_owned(),
            start_ts: now_ts - 3 * DAY_MS,
            duration_min: 60,
            online: true,
        },
        Lesson {
            id: "l-5".to_owned(),
            subject: "Chemistry".to_owned(),
            with_name: "Leo Park".to_owned(),
            when_label: "Last Fri 10:00 AM".to_owned(),
            start_ts: now_ts - 6 * DAY_MS,
            duration_min: 45,
            online: false,
        },
    ]
}

#[must_use]
pub fn mock_students() -> Vec<StudentRecord> {
    vec![
        StudentRecord {
            id: "s-1".to_owned(),
            name: "Maya Chen".to_owned(),
            subject: "Algebra II".to_owned(),
            grade_level: "Grade 10".to_owned(),
            lessons_completed: 14,
        },
        StudentRecord {
            id: "s-2".to_owned(),
            name: "Leo Park".to_owned(),
            subject: "Chemistry".to_owned(),
            grade_level: "Grade 11".to_owned(),
            lessons_completed: 6,
        },
        StudentRecord {
            id: "s-3".to_owned(),
            name: "Ana Silva".to_owned(),
            subject: "Essay Writing".to_owned(),
            grade_level: "Grade 9".to_owned(),
            lessons_completed: 21,
        },
        StudentRecord {
            id: "s-4".to_owned(),
            name: "Noah Reed".to_owned(),
            subject: "Algebra II".to_owned(),
            grade_level: "Grade 10".to_owned(),
            lessons_completed: 2,
        },
    ]
}

#[must_use]
pub fn mock_tutors() -> Vec<Tutor> {
    vec![
        Tutor {
            id: "t-1".to_owned(),
            name: "Rosa Okafor".to_owned(),
            subjects: vec![Subject::Math, Subject::Science],
            hourly_rate_cents: 5500,
            rating: 4.9,
            years_experience: 8,
            bio: "Calculus, physics, and exam prep with a focus on fundamentals.".to_owned(),
        },
        Tutor {
            id: "t-2".to_owned(),
            name: "Tom Abel".to_owned(),
            subjects: vec![Subject::English, Subject::History],
            hourly_rate_cents: 4000,
            rating: 4.6,
            years_experience: 5,
            bio: "Essay coaching and reading comprehension for middle and high school.".to_owned(),
        },
        Tutor {
            id: "t-3".to_owned(),
            name: "Nadia Kim".to_owned(),
            subjects: vec![Subject::Math],
            hourly_rate_cents: 4800,
            rating: 4.8,
            years_experience: 6,
            bio: "Algebra and geometry, patient step-by-step problem solving.".to_owned(),
        },
        Tutor {
            id: "t-4".to_owned(),
            name: "Luis Ortega".to_owned(),
            subjects: vec![Subject::Languages],
            hourly_rate_cents: 3500,
            rating: 4.7,
            years_experience: 4,
            bio: "Conversational Spanish and French from beginner to AP level.".to_owned(),
        },
        Tutor {
            id: "t-5".to_owned(),
            name: "Grete Hansen".to_owned(),
            subjects: vec![Subject::Music],
            hourly_rate_cents: 5000,
            rating: 5.0,
            years_experience: 12,
            bio: "Piano and music theory; recital and audition preparation.".to_owned(),
        },
    ]
}

#[must_use]
pub fn mock_payments() -> Vec<PaymentRecord> {
    vec![
        PaymentRecord {
            id: "p-1".to_owned(),
            child_name: "Noah Reed".to_owned(),
            description: "4 × Algebra II with N. Kim".to_owned(),
            amount_cents: 19200,
            when_label: "Aug 1".to_owned(),
            status: PaymentStatus::Due,
        },
        PaymentRecord {
            id: "p-2".to_owned(),
            child_name: "Noah Reed".to_owned(),
            description: "4 × Algebra II with N. Kim".to_owned(),
            amount_cents: 19200,
            when_label: "Jul 1".to_owned(),
            status: PaymentStatus::Paid,
        },
        PaymentRecord {
            id: "p-3".to_owned(),
            child_name: "Emma Reed".to_owned(),
            description: "2 × Piano with G. Hansen".to_owned(),
            amount_cents: 10000,
            when_label: "Jul 18".to_owned(),
            status: PaymentStatus::Paid,
        },
    ]
}

#[must_use]
pub fn mock_children() -> Vec<ChildSummary> {
    vec![
        ChildSummary {
            name: "Noah Reed".to_owned(),
            grade_level: "Grade 10".to_owned(),
            subject: "Algebra II".to_owned(),
            tutor_name: "Nadia Kim".to_owned(),
        },
        ChildSummary {
            name: "Emma Reed".to_owned(),
            grade_level: "Grade 7".to_owned(),
            subject: "Piano".to_owned(),
            tutor_name: "Grete Hansen".to_owned(),
        },
    ]
}
