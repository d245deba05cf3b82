//! Teacher-side student roster state with text search.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

/// A student as listed on the teacher's roster screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    /// Subject this student is tutored in.
    pub subject: String,
    /// Display grade, e.g. `"Grade 9"`.
    pub grade_level: String,
    pub lessons_completed: u32,
}

/// Roster list plus the live search query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterState {
    pub items: Vec<StudentRecord>,
    pub query: String,
}

impl RosterState {
    /// Records whose name or subject contains the query,
    /// case-insensitively. An empty query matches everything.
    #[must_use]
    pub fn filtered(&self) -> Vec<StudentRecord> {
        let needle = self.query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|record| matches(record, &needle))
            .cloned()
            .collect()
    }
}

fn matches(record: &StudentRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record.subject.to_lowercase().contains(needle)
}
