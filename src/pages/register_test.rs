use super::*;

#[test]
fn valid_form_passes() {
    assert_eq!(
        registration_error("Dev", "dev@example.com", "hunter2hunter2", "hunter2hunter2"),
        None
    );
}

#[test]
fn missing_identity_fields_are_rejected_first() {
    assert_eq!(
        registration_error("  ", "dev@example.com", "hunter2hunter2", "hunter2hunter2"),
        Some("Name and email are required")
    );
    assert_eq!(
        registration_error("Dev", "", "hunter2hunter2", "hunter2hunter2"),
        Some("Name and email are required")
    );
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(
        registration_error("Dev", "dev@example.com", "short", "short"),
        Some("Password must be at least 8 characters")
    );
}

#[test]
fn seven_characters_is_still_short() {
    assert_eq!(
        registration_error("Dev", "dev@example.com", "1234567", "1234567"),
        Some("Password must be at least 8 characters")
    );
}

#[test]
fn mismatched_confirmation_is_rejected() {
    assert_eq!(
        registration_error("Dev", "dev@example.com", "hunter2hunter2", "hunter2hunter3"),
        Some("Passwords do not match")
    );
}
