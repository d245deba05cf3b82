//! Student-graph screens: dashboard, tutor directory, schedule, profile,
//! settings.

pub mod dashboard;
pub mod find_tutors;
pub mod profile;
pub mod schedule;
pub mod settings;
