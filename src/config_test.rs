use super::*;

#[test]
fn plan_by_id_finds_every_tier() {
    for plan in &SUBSCRIPTION_PLANS {
        assert_eq!(plan_by_id(plan.id).map(|p| p.name), Some(plan.name));
    }
}

#[test]
fn plan_by_id_rejects_unknown() {
    assert!(plan_by_id("platinum").is_none());
}

#[test]
fn only_the_free_tier_is_not_purchasable() {
    let free: Vec<_> = SUBSCRIPTION_PLANS.iter().filter(|p| !p.purchasable()).collect();
    assert_eq!(free.len(), 1);
    assert_eq!(free[0].id, FREE_PLAN_ID);
    assert_eq!(free[0].price, 0);
}

#[test]
fn tiers_are_ordered_by_limit_and_price() {
    for pair in SUBSCRIPTION_PLANS.windows(2) {
        assert!(pair[0].request_limit < pair[1].request_limit);
        assert!(pair[0].price < pair[1].price);
    }
}

// The backend serves the same table; the catalog stays the source of
// truth for rendering, so the two must agree wherever they overlap.
#[test]
fn catalog_agrees_with_the_served_plan_list() {
    let body: crate::net::types::PlansResponse = serde_json::from_value(serde_json::json!({
        "success": true,
        "plans": [
            {
                "id": "free",
                "name": "Free",
                "price": 0,
                "request_limit": 1000,
                "features": ["1,000 requests per month"],
            },
            {
                "id": "pro",
                "name": "Pro",
                "price": 15,
                "request_limit": 10000,
                "features": ["10,000 requests per month"],
            },
        ]
    }))
    .expect("plan list");

    for plan in body.plans.expect("plans") {
        let spec = plan_by_id(&plan.id).expect("known plan");
        assert_eq!(spec.name, plan.name);
        assert!((f64::from(spec.price) - plan.price).abs() < f64::EPSILON);
        assert_eq!(spec.request_limit, plan.request_limit);
    }
}
