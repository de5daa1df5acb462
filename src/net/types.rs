//! Wire types for the Identity and Subscription REST APIs.
//!
//! Every response body is an envelope `{ "success": bool, ...payload }`;
//! `success == false` carries an optional `message` for user display.
//! Payload fields the client does not read are left out and ignored by
//! serde on deserialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Authenticated user snapshot, replaced wholesale on every verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub subscription_plan: String,
    pub subscription_status: Option<String>,
    pub created_at: Option<String>,
}

/// Plan configuration embedded in a subscription snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    pub name: String,
    pub price: f64,
    pub request_limit: u64,
    pub features: Vec<String>,
}

/// Current subscription snapshot from `GET /api/subscription/current`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub user_id: Option<String>,
    pub plan: String,
    pub plan_config: Option<PlanConfig>,
    pub status: String,
    #[serde(default)]
    pub requests_used: u64,
    #[serde(default)]
    pub request_limit: u64,
    pub current_period_start: Option<String>,
    pub current_period_end: Option<String>,
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
}

/// One entry of the server-side plan list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub request_limit: u64,
    pub features: Vec<String>,
}

/// Aggregated usage analytics for the trailing period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsageAnalytics {
    pub period: UsagePeriod,
    pub totals: UsageTotals,
    /// Keyed by model name; `BTreeMap` keeps the rendered order stable.
    #[serde(default)]
    pub by_model: BTreeMap<String, ModelUsage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsagePeriod {
    pub start: String,
    pub end: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsageTotals {
    #[serde(default)]
    pub requests: u64,
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub generated_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
    #[serde(default)]
    pub total_cost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelUsage {
    #[serde(default)]
    pub requests: u64,
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub generated_tokens: u64,
    #[serde(default)]
    pub cost: f64,
}

/// One subscription change from `GET /api/subscription/history`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub subscription_plan: String,
    pub action: String,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub created_at: Option<String>,
}

// =============================================================
// Response envelopes
// =============================================================

/// Response to login and register: user plus freshly minted token pair.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: Option<String>,
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

/// Response to `GET /api/auth/me`.
#[derive(Clone, Debug, Deserialize)]
pub struct MeResponse {
    pub success: bool,
    pub message: Option<String>,
    pub user: Option<User>,
}

/// Envelope for operations that return only a confirmation message
/// (change password, cancel subscription).
#[derive(Clone, Debug, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RefreshResponse {
    pub success: bool,
    pub access_token: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlansResponse {
    pub success: bool,
    pub plans: Option<Vec<Plan>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SubscriptionResponse {
    pub success: bool,
    pub message: Option<String>,
    pub subscription: Option<Subscription>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CheckoutResponse {
    pub success: bool,
    pub message: Option<String>,
    pub checkout_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub history: Option<Vec<HistoryEntry>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UsageResponse {
    pub success: bool,
    pub analytics: Option<UsageAnalytics>,
}
