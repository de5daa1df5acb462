use super::*;

fn user() -> crate::net::types::User {
    crate::net::types::User {
        user_id: "u-1".to_owned(),
        email: "dev@example.com".to_owned(),
        name: "Dev".to_owned(),
        subscription_plan: "free".to_owned(),
        subscription_status: None,
        created_at: None,
    }
}

// =============================================================
// Gate rendering decision
// =============================================================

#[test]
fn unsettled_session_waits() {
    assert_eq!(gate_decision(false, true), GateDecision::Wait);
}

#[test]
fn loading_takes_precedence_over_authenticated() {
    assert_eq!(gate_decision(true, true), GateDecision::Wait);
}

#[test]
fn settled_authenticated_renders_children() {
    assert_eq!(gate_decision(true, false), GateDecision::Render);
}

#[test]
fn settled_unauthenticated_redirects() {
    assert_eq!(gate_decision(false, false), GateDecision::RedirectToLogin);
}

// =============================================================
// Verification trigger
// =============================================================

#[test]
fn verification_runs_only_while_unsettled() {
    assert!(should_verify(false, true));
    assert!(!should_verify(true, false));
    assert!(!should_verify(true, true));
    // A settled rejection does not re-trigger verification.
    assert!(!should_verify(false, false));
}

// =============================================================
// Verification outcomes
// =============================================================

#[test]
fn missing_token_settles_rejected_without_network() {
    let mut auth = crate::state::auth::AuthState::default();
    apply_missing_token(&mut auth);

    assert!(!auth.loading);
    assert!(!auth.authenticated);
    assert!(auth.user.is_none());
    assert_eq!(gate_decision(auth.authenticated, auth.loading), GateDecision::RedirectToLogin);
}

#[test]
fn confirmed_user_settles_authenticated() {
    let mut auth = crate::state::auth::AuthState::default();
    let clear = apply_verification(&mut auth, Some(user()));

    assert!(!clear);
    assert!(auth.authenticated);
    assert_eq!(auth.user, Some(user()));
    assert_eq!(gate_decision(auth.authenticated, auth.loading), GateDecision::Render);
}

#[test]
fn failed_verification_settles_rejected_and_clears_tokens() {
    let mut auth = crate::state::auth::AuthState::default();
    let clear = apply_verification(&mut auth, None);

    assert!(clear);
    assert!(!auth.authenticated);
    assert!(!auth.loading);
    assert_eq!(gate_decision(auth.authenticated, auth.loading), GateDecision::RedirectToLogin);
}

// =============================================================
// Login redirect target
// =============================================================

#[test]
fn redirect_preserves_path_and_query() {
    assert_eq!(
        login_redirect_target("/account", ""),
        "/login?from=/account"
    );
    assert_eq!(
        login_redirect_target("/pricing", "?plan=pro"),
        "/login?from=/pricing%3Fplan%3Dpro"
    );
}

#[test]
fn redirect_from_root_carries_no_target() {
    assert_eq!(login_redirect_target("/", ""), "/login");
    assert_eq!(login_redirect_target("", ""), "/login");
}
