use super::*;

#[test]
fn validate_signup_input_accepts_trimmed_fields() {
    assert_eq!(
        validate_signup_input("  Dana Reed ", " dana@example.com ", "longenough"),
        Ok(("Dana Reed".to_owned(), "dana@example.com".to_owned(), "longenough".to_owned()))
    );
}

#[test]
fn validate_signup_input_requires_name() {
    assert_eq!(validate_signup_input("  ", "a@b.com", "longenough"), Err("Enter your name."));
}

#[test]
fn validate_signup_input_requires_plausible_email() {
    assert_eq!(
        validate_signup_input("Dana", "nope", "longenough"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_signup_input_requires_min_password_length() {
    assert_eq!(
        validate_signup_input("Dana", "a@b.com", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_signup_input_password_boundary() {
    assert!(validate_signup_input("Dana", "a@b.com", "12345678").is_ok());
    assert!(validate_signup_input("Dana", "a@b.com", "1234567").is_err());
}
