use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_rejects_empty_email() {
    assert_eq!(validate_login_input("   ", "hunter2"), Err("Enter a valid email address."));
}

#[test]
fn validate_login_input_rejects_email_without_at() {
    assert_eq!(validate_login_input("example.com", "hunter2"), Err("Enter a valid email address."));
}

#[test]
fn validate_login_input_rejects_empty_password() {
    assert_eq!(validate_login_input("user@example.com", ""), Err("Enter your password."));
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("a@b.com", "  spaces kept  "),
        Ok(("a@b.com".to_owned(), "  spaces kept  ".to_owned()))
    );
}
