//! Teacher-graph screens: dashboard, schedule, students, profile, settings.

pub mod dashboard;
pub mod profile;
pub mod schedule;
pub mod settings;
pub mod students;
