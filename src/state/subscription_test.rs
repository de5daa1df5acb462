use super::*;

fn snapshot() -> Subscription {
    Subscription {
        user_id: Some("u-1".to_owned()),
        plan: "pro".to_owned(),
        plan_config: None,
        status: "active".to_owned(),
        requests_used: 120,
        request_limit: 10_000,
        current_period_start: None,
        current_period_end: Some("2026-09-01T00:00:00".to_owned()),
        stripe_customer_id: None,
        stripe_subscription_id: None,
    }
}

#[test]
fn default_is_empty_and_idle() {
    let state = SubscriptionState::default();
    assert!(state.current.is_none());
    assert!(!state.loading);
}

#[test]
fn set_subscription_replaces_snapshot() {
    let mut state = SubscriptionState::default();
    state.set_subscription(Some(snapshot()));
    assert_eq!(state.current.as_ref().map(|s| s.plan.as_str()), Some("pro"));

    state.set_subscription(None);
    assert!(state.current.is_none());
}

#[test]
fn set_loading_does_not_touch_snapshot() {
    let mut state = SubscriptionState::default();
    state.set_subscription(Some(snapshot()));
    state.set_loading(true);
    assert!(state.loading);
    assert!(state.current.is_some());
}

#[test]
fn increment_usage_counts_against_current_period() {
    let mut state = SubscriptionState::default();
    state.set_subscription(Some(snapshot()));
    state.increment_usage();
    state.increment_usage();
    assert_eq!(state.current.as_ref().map(|s| s.requests_used), Some(122));
}

#[test]
fn increment_usage_without_snapshot_is_noop() {
    let mut state = SubscriptionState::default();
    state.increment_usage();
    assert!(state.current.is_none());
}
