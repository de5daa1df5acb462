//! REST API helpers for the Identity and Subscription services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token attached where the endpoint requires one. Server-side (SSR):
//! stubs returning `None`/error since these endpoints are only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Read-only fetches return `Option` and degrade to "nothing to show";
//! user-initiated operations return `Result<_, String>` where the error
//! string is the server's `message` when present, or fallback text. A
//! transport failure and an explicit denial look the same to callers of
//! [`fetch_current_user`]: no user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AuthResponse, HistoryEntry, MeResponse, Plan, Subscription, UsageAnalytics, User,
};

/// Fallback text for failures that carry no server message.
pub const GENERIC_ERROR: &str = "An error occurred";

/// Format a token as an `Authorization` header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Pick the server-provided message, or fall back to generic text.
pub fn message_or(message: Option<String>, fallback: &str) -> String {
    match message {
        Some(m) if !m.is_empty() => m,
        _ => fallback.to_owned(),
    }
}

/// Extract the user from a `/me` envelope; any shape other than
/// `{success: true, user: {...}}` counts as unverified.
pub fn user_from_me(body: MeResponse) -> Option<User> {
    if body.success { body.user } else { None }
}

/// Build the history URL, appending `?limit=N` only when given.
pub fn history_url(limit: Option<u32>) -> String {
    match limit {
        Some(limit) => format!("/api/subscription/history?limit={limit}"),
        None => "/api/subscription/history".to_owned(),
    }
}

// =============================================================
// Identity API
// =============================================================

/// Register a new account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns the server `message` on a reported failure, generic text on a
/// transport failure or malformed body.
pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .map_err(|_| GENERIC_ERROR.to_owned())?
            .send()
            .await
            .map_err(|_| GENERIC_ERROR.to_owned())?;
        let body: AuthResponse = resp.json().await.map_err(|_| GENERIC_ERROR.to_owned())?;
        if body.success {
            Ok(body)
        } else {
            Err(message_or(body.message, GENERIC_ERROR))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Log in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server `message` on a reported failure, generic text on a
/// transport failure or malformed body.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .map_err(|_| GENERIC_ERROR.to_owned())?
            .send()
            .await
            .map_err(|_| GENERIC_ERROR.to_owned())?;
        let body: AuthResponse = resp.json().await.map_err(|_| GENERIC_ERROR.to_owned())?;
        if body.success {
            Ok(body)
        } else {
            Err(message_or(body.message, GENERIC_ERROR))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the currently authenticated user from `GET /api/auth/me`.
///
/// Returns `None` for every failure mode: missing or rejected credential,
/// transport failure, or a body that does not parse.
pub async fn fetch_current_user(token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .ok()?;
        let body: MeResponse = resp.json().await.ok()?;
        user_from_me(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Change the account password via `POST /api/auth/change-password`.
///
/// # Errors
///
/// Returns the server `message` on a reported failure, generic text on a
/// transport failure or malformed body.
pub async fn change_password(
    token: &str,
    old_password: &str,
    new_password: &str,
) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/change-password")
            .header("Authorization", &bearer(token))
            .json(&serde_json::json!({
                "old_password": old_password,
                "new_password": new_password,
            }))
            .map_err(|_| GENERIC_ERROR.to_owned())?
            .send()
            .await
            .map_err(|_| GENERIC_ERROR.to_owned())?;
        let body: super::types::MessageResponse =
            resp.json().await.map_err(|_| GENERIC_ERROR.to_owned())?;
        if body.success {
            Ok(message_or(body.message, "Password updated successfully"))
        } else {
            Err(message_or(body.message, "Failed to change password"))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, old_password, new_password);
        Err("not available on server".to_owned())
    }
}

/// Mint a fresh access token via `POST /api/auth/refresh`, authenticated
/// with the refresh token. Part of the Identity API surface; the session
/// gate never calls it automatically and fails closed instead.
pub async fn refresh_access_token(refresh_token: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/refresh")
            .header("Authorization", &bearer(refresh_token))
            .send()
            .await
            .ok()?;
        let body: super::types::RefreshResponse = resp.json().await.ok()?;
        if body.success { body.access_token } else { None }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = refresh_token;
        None
    }
}

// =============================================================
// Subscription API
// =============================================================

/// Fetch the server-side plan list from `GET /api/subscription/plans`.
pub async fn fetch_plans() -> Option<Vec<Plan>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/subscription/plans")
            .send()
            .await
            .ok()?;
        let body: super::types::PlansResponse = resp.json().await.ok()?;
        if body.success { body.plans } else { None }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the current subscription snapshot from
/// `GET /api/subscription/current`.
pub async fn fetch_current_subscription(token: &str) -> Option<Subscription> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/subscription/current")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .ok()?;
        let body: super::types::SubscriptionResponse = resp.json().await.ok()?;
        if body.success { body.subscription } else { None }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Create a hosted checkout session via `POST /api/subscription/checkout`
/// and return the redirect URL.
///
/// # Errors
///
/// Returns the server `message` on a reported failure, generic text on a
/// transport failure or malformed body.
pub async fn create_checkout(
    token: &str,
    plan: &str,
    success_url: &str,
    cancel_url: &str,
) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/subscription/checkout")
            .header("Authorization", &bearer(token))
            .json(&serde_json::json!({
                "plan": plan,
                "success_url": success_url,
                "cancel_url": cancel_url,
            }))
            .map_err(|_| GENERIC_ERROR.to_owned())?
            .send()
            .await
            .map_err(|_| GENERIC_ERROR.to_owned())?;
        let body: super::types::CheckoutResponse =
            resp.json().await.map_err(|_| GENERIC_ERROR.to_owned())?;
        match (body.success, body.checkout_url) {
            (true, Some(url)) => Ok(url),
            (_, _) => Err(message_or(body.message, "Failed to start checkout")),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, plan, success_url, cancel_url);
        Err("not available on server".to_owned())
    }
}

/// Cancel the current subscription via `POST /api/subscription/cancel`.
///
/// # Errors
///
/// Returns the server `message` on a reported failure, generic text on a
/// transport failure or malformed body.
pub async fn cancel_subscription(token: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/subscription/cancel")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|_| GENERIC_ERROR.to_owned())?;
        let body: super::types::MessageResponse =
            resp.json().await.map_err(|_| GENERIC_ERROR.to_owned())?;
        if body.success {
            Ok(message_or(body.message, "Subscription canceled"))
        } else {
            Err(message_or(body.message, "Failed to cancel subscription"))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch recent subscription changes from
/// `GET /api/subscription/history`.
pub async fn fetch_history(token: &str, limit: Option<u32>) -> Option<Vec<HistoryEntry>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&history_url(limit))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .ok()?;
        let body: super::types::HistoryResponse = resp.json().await.ok()?;
        if body.success { body.history } else { None }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, limit);
        None
    }
}

/// Fetch usage analytics from `GET /api/subscription/usage`.
pub async fn fetch_usage(token: &str) -> Option<UsageAnalytics> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/subscription/usage")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .ok()?;
        let body: super::types::UsageResponse = resp.json().await.ok()?;
        if body.success { body.analytics } else { None }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}
