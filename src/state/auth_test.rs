use super::*;

fn user() -> User {
    User {
        user_id: "u-1".to_owned(),
        email: "dev@example.com".to_owned(),
        name: "Dev".to_owned(),
        subscription_plan: "pro".to_owned(),
        subscription_status: Some("active".to_owned()),
        created_at: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_has_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.authenticated);
}

#[test]
fn default_starts_loading() {
    assert!(AuthState::default().loading);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn set_user_settles_and_authenticates() {
    let mut state = AuthState::default();
    state.set_user(Some(user()));

    assert!(state.authenticated);
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.user_id.as_str()), Some("u-1"));
}

#[test]
fn set_user_none_settles_unauthenticated() {
    let mut state = AuthState::default();
    state.set_user(None);

    assert!(!state.authenticated);
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn set_loading_leaves_user_untouched() {
    let mut state = AuthState::default();
    state.set_user(Some(user()));
    state.set_loading(true);

    assert!(state.loading);
    assert!(state.authenticated);
    assert!(state.user.is_some());
}

#[test]
fn clear_resets_everything() {
    let mut state = AuthState::default();
    state.set_user(Some(user()));
    state.clear();

    assert_eq!(
        state,
        AuthState {
            user: None,
            authenticated: false,
            loading: false,
        }
    );
}

#[test]
fn clear_from_fresh_state_also_settles() {
    let mut state = AuthState::default();
    state.clear();
    assert!(!state.loading);
}

// Every transition must preserve `authenticated == user.is_some()`.
#[test]
fn authenticated_always_tracks_user_presence() {
    let mut state = AuthState::default();
    assert_eq!(state.authenticated, state.user.is_some());

    state.set_user(Some(user()));
    assert_eq!(state.authenticated, state.user.is_some());

    state.set_loading(true);
    assert_eq!(state.authenticated, state.user.is_some());

    state.set_user(None);
    assert_eq!(state.authenticated, state.user.is_some());

    state.clear();
    assert_eq!(state.authenticated, state.user.is_some());
}
