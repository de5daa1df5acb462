//! Reusable UI components.

pub mod plan_card;
pub mod protected_route;
pub mod top_nav;
pub mod usage_meter;
