//! Tutor directory state with subject and text filtering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs the student-side Find Tutors screen. Filtering is a linear scan
//! over the in-memory tutor list; both filters compose (subject AND text).

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

/// Subjects tutors can offer; also drives the filter chips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subject {
    Math,
    Science,
    English,
    History,
    Languages,
    Music,
}

impl Subject {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Math => "Math",
            Self::Science => "Science",
            Self::English => "English",
            Self::History => "History",
            Self::Languages => "Languages",
            Self::Music => "Music",
        }
    }

    /// All subjects, in chip display order.
    #[must_use]
    pub fn all() -> [Self; 6] {
        [Self::Math, Self::Science, Self::English, Self::History, Self::Languages, Self::Music]
    }
}

/// A tutor listing in the directory.
#[derive(Clone, Debug, PartialEq)]
pub struct Tutor {
    pub id: String,
    pub name: String,
    pub subjects: Vec<Subject>,
    pub hourly_rate_cents: i64,
    /// Average review rating, 0.0–5.0.
    pub rating: f64,
    pub years_experience: u32,
    pub bio: String,
}

/// Directory list plus the live filters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryState {
    pub items: Vec<Tutor>,
    pub query: String,
    pub subject: Option<Subject>,
}

impl DirectoryState {
    /// Tutors passing both the subject chip and the text query (name or
    /// bio, case-insensitive). No filters means the full list.
    #[must_use]
    pub fn filtered(&self) -> Vec<Tutor> {
        let needle = self.query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|tutor| self.subject.is_none_or(|s| tutor.subjects.contains(&s)))
            .filter(|tutor| matches_text(tutor, &needle))
            .cloned()
            .collect()
    }
}

fn matches_text(tutor: &Tutor, needle: &str) -> bool {
    needle.is_empty()
        || tutor.name.to_lowercase().contains(needle)
        || tutor.bio.to_lowercase().contains(needle)
}
