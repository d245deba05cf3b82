use super::*;

// =============================================================
// money
// =============================================================

#[test]
fn money_formats_dollars_and_cents() {
    assert_eq!(money(4500), "$45.00");
    assert_eq!(money(125), "$1.25");
}

#[test]
fn money_pads_single_digit_cents() {
    assert_eq!(money(105), "$1.05");
}

#[test]
fn money_zero() {
    assert_eq!(money(0), "$0.00");
}

#[test]
fn money_negative_keeps_sign_before_symbol() {
    assert_eq!(money(-550), "-$5.50");
}

// =============================================================
// duration
// =============================================================

#[test]
fn duration_under_an_hour() {
    assert_eq!(duration(45), "45 min");
}

#[test]
fn duration_whole_hours() {
    assert_eq!(duration(120), "2 h");
}

#[test]
fn duration_mixed() {
    assert_eq!(duration(75), "1 h 15 min");
}

// =============================================================
// rating
// =============================================================

#[test]
fn rating_rounds_to_one_decimal() {
    assert_eq!(rating(4.75), "4.8");
    assert_eq!(rating(5.0), "5.0");
}
