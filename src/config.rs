//! Static plan catalog and billing configuration.
//!
//! The catalog is the single source of truth for what the pricing page
//! renders; the backend's plan list endpoint serves the same table and is
//! only consulted for the current-plan marker.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Publishable billing key, injected at build time. Checkout itself is
/// fully delegated to the backend; the key's absence only downgrades the
/// redirect flow to a logged warning.
pub const STRIPE_PUBLISHABLE_KEY: Option<&str> = option_env!("STRIPE_PUBLISHABLE_KEY");

/// One subscription tier as rendered on the pricing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanSpec {
    pub id: &'static str,
    pub name: &'static str,
    /// Monthly price in whole dollars.
    pub price: u32,
    pub request_limit: u64,
    pub features: &'static [&'static str],
}

impl PlanSpec {
    /// Whether checkout applies: the free tier has nothing to buy.
    pub fn purchasable(&self) -> bool {
        self.id != FREE_PLAN_ID
    }
}

pub const FREE_PLAN_ID: &str = "free";

pub static SUBSCRIPTION_PLANS: [PlanSpec; 3] = [
    PlanSpec {
        id: "free",
        name: "Free",
        price: 0,
        request_limit: 1_000,
        features: &[
            "1,000 requests per month",
            "Access to basic models",
            "Community support",
        ],
    },
    PlanSpec {
        id: "pro",
        name: "Pro",
        price: 15,
        request_limit: 10_000,
        features: &[
            "10,000 requests per month",
            "Access to all models",
            "Priority support",
            "Advanced analytics",
        ],
    },
    PlanSpec {
        id: "enterprise",
        name: "Enterprise",
        price: 30,
        request_limit: 100_000,
        features: &[
            "100,000 requests per month",
            "Access to all models",
            "Priority processing",
            "Dedicated support",
            "Custom integrations",
        ],
    },
];

/// Look up a plan by its identifier.
pub fn plan_by_id(id: &str) -> Option<&'static PlanSpec> {
    SUBSCRIPTION_PLANS.iter().find(|p| p.id == id)
}
