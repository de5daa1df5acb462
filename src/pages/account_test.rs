use super::*;

// =============================================================
// Password change validation
// =============================================================

#[test]
fn valid_change_passes() {
    assert_eq!(password_change_error("hunter2hunter2", "hunter2hunter2"), None);
}

#[test]
fn mismatch_is_reported_before_strength() {
    assert_eq!(
        password_change_error("short", "different"),
        Some("New passwords do not match")
    );
}

#[test]
fn short_password_never_reaches_the_network() {
    assert_eq!(
        password_change_error("1234567", "1234567"),
        Some("Password must be at least 8 characters")
    );
}

#[test]
fn eight_characters_is_accepted() {
    assert_eq!(password_change_error("12345678", "12345678"), None);
}

// =============================================================
// Cancel button visibility
// =============================================================

#[test]
fn active_paid_plan_can_cancel() {
    assert!(can_cancel("pro", Some("active")));
    assert!(can_cancel("enterprise", Some("active")));
}

#[test]
fn free_plan_cannot_cancel() {
    assert!(!can_cancel("free", Some("active")));
}

#[test]
fn inactive_or_unknown_status_cannot_cancel() {
    assert!(!can_cancel("pro", Some("canceled")));
    assert!(!can_cancel("pro", None));
}
