use super::*;

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_schedule_tab_is_upcoming() {
    let state = UiState::default();
    assert_eq!(state.schedule_tab, ScheduleTab::Upcoming);
}

#[test]
fn schedule_tab_variants_are_distinct() {
    assert_ne!(ScheduleTab::Upcoming, ScheduleTab::Past);
}
