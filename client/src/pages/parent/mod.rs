//! Parent-graph screens: dashboard, schedule, payments, profile, settings.

pub mod dashboard;
pub mod payments;
pub mod profile;
pub mod schedule;
pub mod settings;
