//! Pricing card for one subscription tier.

use leptos::prelude::*;

use crate::config::PlanSpec;

/// One plan card with price, limit, feature list, and an upgrade button.
///
/// The button is disabled for the visitor's current plan, for the free
/// tier (nothing to buy), and while a checkout request is in flight.
#[component]
pub fn PlanCard(
    plan: &'static PlanSpec,
    #[prop(into)] current: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    on_upgrade: Callback<&'static str>,
) -> impl IntoView {
    let disabled = move || current.get() || busy.get() || !plan.purchasable();

    let label = move || {
        if current.get() {
            "Current Plan"
        } else if !plan.purchasable() {
            "Free Plan"
        } else {
            "Upgrade"
        }
    };

    view! {
        <div class="plan-card" class:plan-card--highlight=plan.purchasable()>
            <div class="plan-card__header">
                <h3 class="plan-card__name">{plan.name}</h3>
                <div class="plan-card__price">
                    {format!("${}", plan.price)}
                    <span class="plan-card__period">"/mo"</span>
                </div>
                <p class="plan-card__limit">
                    {format!("{} requests per month", plan.request_limit)}
                </p>
            </div>
            <ul class="plan-card__features">
                {plan
                    .features
                    .iter()
                    .map(|feature| view! { <li class="plan-card__feature">{*feature}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <button
                class="btn btn--primary plan-card__upgrade"
                disabled=disabled
                on:click=move |_| on_upgrade.run(plan.id)
            >
                {label}
            </button>
        </div>
    }
}
