use super::*;

#[test]
fn toggle_flips_state() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn read_preference_defaults_to_light_off_browser() {
    // Outside a browser environment there is no storage or media query.
    assert!(!read_preference());
}
