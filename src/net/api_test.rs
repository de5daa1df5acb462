use super::*;

// =============================================================
// Pure request/response helpers
// =============================================================

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn message_or_prefers_server_message() {
    assert_eq!(message_or(Some("Invalid token".to_owned()), "fallback"), "Invalid token");
}

#[test]
fn message_or_falls_back_on_missing_or_empty() {
    assert_eq!(message_or(None, GENERIC_ERROR), GENERIC_ERROR);
    assert_eq!(message_or(Some(String::new()), GENERIC_ERROR), GENERIC_ERROR);
}

#[test]
fn history_url_appends_limit_only_when_given() {
    assert_eq!(history_url(Some(10)), "/api/subscription/history?limit=10");
    assert_eq!(history_url(None), "/api/subscription/history");
}

// =============================================================
// /me envelope handling
// =============================================================

#[test]
fn user_from_me_accepts_success_with_user() {
    let body: MeResponse = serde_json::from_value(serde_json::json!({
        "success": true,
        "user": {
            "user_id": "u-1",
            "email": "dev@example.com",
            "name": "Dev",
            "subscription_plan": "pro",
            "subscription_status": "active",
        }
    }))
    .expect("envelope");

    let user = user_from_me(body).expect("user");
    assert_eq!(user.user_id, "u-1");
    assert_eq!(user.subscription_plan, "pro");
}

#[test]
fn user_from_me_rejects_reported_failure() {
    let body: MeResponse = serde_json::from_value(serde_json::json!({
        "success": false,
        "message": "Unauthorized",
    }))
    .expect("envelope");

    assert!(user_from_me(body).is_none());
}

#[test]
fn user_from_me_rejects_success_without_user() {
    let body: MeResponse =
        serde_json::from_value(serde_json::json!({ "success": true })).expect("envelope");
    assert!(user_from_me(body).is_none());
}

#[test]
fn me_envelope_without_success_flag_does_not_parse() {
    let parsed = serde_json::from_value::<MeResponse>(serde_json::json!({
        "user": { "user_id": "u-1" }
    }));
    assert!(parsed.is_err());
}
