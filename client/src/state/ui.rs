//! Local UI chrome state (dark mode, list tabs).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`schedule`,
//! `roster`, `directory`) so screen controls can evolve independently of
//! the data they present.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which half of a schedule list is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScheduleTab {
    #[default]
    Upcoming,
    Past,
}

/// UI state for theme and per-screen tab toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub schedule_tab: ScheduleTab,
}
