//! Pricing page: plan catalog and hosted checkout handoff.

use leptos::prelude::*;

use crate::components::plan_card::PlanCard;
use crate::components::top_nav::TopNav;
use crate::config;

#[cfg(feature = "hydrate")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Full-page navigation to the hosted checkout.
#[cfg(feature = "hydrate")]
fn redirect_to(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

/// Pricing page. The static catalog is what renders; the backend snapshot
/// only marks the visitor's current plan. Upgrading asks the backend for a
/// checkout session and hands the whole page over to the returned URL; a
/// busy flag guards double submission while that request is in flight.
#[component]
pub fn PricingPage() -> impl IntoView {
    let current_plan = RwSignal::new(config::FREE_PLAN_ID.to_owned());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = crate::util::tokens::read_auth_token() else {
                    return;
                };
                if let Some(snapshot) =
                    crate::net::api::fetch_current_subscription(&token).await
                {
                    current_plan.set(snapshot.plan);
                }
            });
        }
    });

    let on_upgrade = Callback::new(move |plan_id: &'static str| {
        if busy.get() || plan_id == config::FREE_PLAN_ID {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                if config::STRIPE_PUBLISHABLE_KEY.is_none() {
                    log::warn!("billing publishable key not configured at build time");
                }
                let Some(origin) = page_origin() else {
                    busy.set(false);
                    return;
                };
                let Some(token) = crate::util::tokens::read_auth_token() else {
                    busy.set(false);
                    error.set(Some("Please sign in again".to_owned()));
                    return;
                };

                let success_url = format!("{origin}/subscription/success");
                let cancel_url = format!("{origin}/pricing");
                let result = crate::net::api::create_checkout(
                    &token,
                    plan_id,
                    &success_url,
                    &cancel_url,
                )
                .await;
                match result {
                    // Leaving the page; the busy flag stays on until the
                    // browser navigates.
                    Ok(url) => redirect_to(&url),
                    Err(message) => {
                        busy.set(false);
                        error.set(Some(message));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = plan_id;
        }
    });

    view! {
        <div class="pricing-page">
            <TopNav/>
            <main class="pricing-page__body">
                <h2>"Choose Your Plan"</h2>
                <p class="pricing-page__subtitle">"Select the plan that fits your workload"</p>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="banner banner--error">{message}</div> })
                }}

                <div class="pricing-page__grid">
                    {config::SUBSCRIPTION_PLANS
                        .iter()
                        .map(|plan| {
                            let current = Signal::derive(move || current_plan.get() == plan.id);
                            view! {
                                <PlanCard plan current busy on_upgrade/>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </main>
        </div>
    }
}
