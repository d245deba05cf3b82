//! Signal-backed state shared across pages via Leptos context.
//!
//! DESIGN
//! ======
//! Session state is kept apart from per-screen list state so routing can
//! change without touching screen data, and screen filters stay pure
//! functions over plain vectors.

pub mod auth;
pub mod directory;
pub mod payments;
pub mod roster;
pub mod schedule;
pub mod ui;
