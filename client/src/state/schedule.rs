//! Lesson list state and schedule partitioning.
//!
//! DESIGN
//! ======
//! Lessons carry a preformatted `when_label` for display and a millisecond
//! timestamp for ordering, so screens never need calendar math beyond
//! comparing against "now".

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// A booked lesson as shown on schedule and dashboard screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub id: String,
    /// Subject taught, e.g. `"Algebra II"`.
    pub subject: String,
    /// Counterparty display name (the student for teachers, the tutor for
    /// students, the child for parents).
    pub with_name: String,
    /// Preformatted display time, e.g. `"Mon 4:00 PM"`.
    pub when_label: String,
    /// Start time in milliseconds since the Unix epoch; ordering only.
    pub start_ts: i64,
    pub duration_min: u32,
    pub online: bool,
}

/// Shared lesson list, seeded from the in-memory fixtures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleState {
    pub lessons: Vec<Lesson>,
}

/// Lessons starting at or after `now_ts`, soonest first.
#[must_use]
pub fn upcoming(lessons: &[Lesson], now_ts: i64) -> Vec<Lesson> {
    let mut out: Vec<Lesson> = lessons.iter().filter(|l| l.start_ts >= now_ts).cloned().collect();
    out.sort_by_key(|l| l.start_ts);
    out
}

/// Lessons that already started, most recent first.
#[must_use]
pub fn past(lessons: &[Lesson], now_ts: i64) -> Vec<Lesson> {
    let mut out: Vec<Lesson> = lessons.iter().filter(|l| l.start_ts < now_ts).cloned().collect();
    out.sort_by_key(|l| std::cmp::Reverse(l.start_ts));
    out
}

/// The next lesson to start, if any.
#[must_use]
pub fn next_lesson(lessons: &[Lesson], now_ts: i64) -> Option<Lesson> {
    upcoming(lessons, now_ts).into_iter().next()
}

/// Number of lessons starting within the next `days` days.
#[must_use]
pub fn count_within_days(lessons: &[Lesson], now_ts: i64, days: i64) -> usize {
    let horizon = now_ts + days * DAY_MS;
    lessons.iter().filter(|l| l.start_ts >= now_ts && l.start_ts < horizon).count()
}

/// Total booked minutes across `lessons`.
#[must_use]
pub fn total_minutes(lessons: &[Lesson]) -> u32 {
    lessons.iter().map(|l| l.duration_min).sum()
}
