use super::*;

#[test]
fn validate_reset_input_trims() {
    assert_eq!(validate_reset_input(" a@b.com "), Ok("a@b.com".to_owned()));
}

#[test]
fn validate_reset_input_rejects_empty() {
    assert_eq!(validate_reset_input("   "), Err("Enter a valid email address."));
}

#[test]
fn validate_reset_input_rejects_missing_at() {
    assert_eq!(validate_reset_input("not-an-email"), Err("Enter a valid email address."));
}
