use super::*;

#[test]
fn now_ms_is_non_negative() {
    assert!(now_ms() >= 0);
}
