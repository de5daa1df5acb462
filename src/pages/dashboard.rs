//! Usage dashboard: current plan, quota meter, and analytics.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::top_nav::TopNav;
use crate::components::usage_meter::UsageMeter;
use crate::net::types::UsageAnalytics;
use crate::state::subscription::SubscriptionState;

/// Date portion of an ISO-8601 timestamp, for display.
pub fn display_date(iso: &str) -> &str {
    iso.split('T').next().unwrap_or(iso)
}

/// Dollar amount with the sub-cent precision the billing data carries.
pub fn format_cost(cost: f64) -> String {
    format!("${cost:.4}")
}

/// Dashboard page. The subscription snapshot and the usage analytics are
/// fetched in parallel on mount; their results meet only at render. A
/// failed fetch keeps whatever was shown before and logs.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let subscription = expect_context::<RwSignal<SubscriptionState>>();
    let usage = RwSignal::new(None::<UsageAnalytics>);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            subscription.update(|s| s.set_loading(true));
            leptos::task::spawn_local(async move {
                let Some(token) = crate::util::tokens::read_auth_token() else {
                    subscription.update(|s| s.set_loading(false));
                    return;
                };
                let (snapshot, analytics) = futures::join!(
                    crate::net::api::fetch_current_subscription(&token),
                    crate::net::api::fetch_usage(&token),
                );
                subscription.update(|s| {
                    if snapshot.is_some() {
                        s.set_subscription(snapshot);
                    } else {
                        log::error!("subscription snapshot fetch failed");
                    }
                    s.set_loading(false);
                });
                match analytics {
                    Some(analytics) => usage.set(Some(analytics)),
                    None => log::error!("usage analytics fetch failed"),
                }
            });
        }
    });

    let plan_name = move || {
        subscription
            .get()
            .current
            .map(|snap| match snap.plan_config {
                Some(config) => config.name,
                None => snap.plan,
            })
            .unwrap_or_else(|| "Free".to_owned())
    };

    view! {
        <div class="dashboard-page">
            <TopNav/>
            <main class="dashboard-page__body">
                <h2>"Usage Dashboard"</h2>

                <Show
                    when=move || !subscription.get().loading
                    fallback=|| view! { <p class="dashboard-page__loading">"Loading..."</p> }
                >
                    <section class="card">
                        <h3>{move || format!("Current Plan: {}", plan_name())}</h3>
                        {move || {
                            subscription
                                .get()
                                .current
                                .map(|snap| {
                                    view! {
                                        <UsageMeter
                                            used=snap.requests_used
                                            limit=snap.request_limit
                                        />
                                    }
                                })
                        }}
                        {move || {
                            subscription
                                .get()
                                .current
                                .and_then(|snap| snap.current_period_end)
                                .map(|end| {
                                    view! {
                                        <p class="dashboard-page__resets">
                                            {format!("Resets on: {}", display_date(&end))}
                                        </p>
                                    }
                                })
                        }}
                    </section>

                    {move || usage.get().map(|analytics| view! { <AnalyticsCard analytics/> })}
                </Show>
            </main>
        </div>
    }
}

/// Totals and the per-model breakdown for the trailing period.
#[component]
fn AnalyticsCard(analytics: UsageAnalytics) -> impl IntoView {
    let period = format!(
        "{} to {}",
        display_date(&analytics.period.start),
        display_date(&analytics.period.end)
    );
    let breakdown = if analytics.by_model.is_empty() {
        None
    } else {
        Some(
            analytics
                .by_model
                .into_iter()
                .map(|(model, usage)| {
                    view! {
                        <div class="analytics__model">
                            <span class="analytics__model-name">{model}</span>
                            <div class="analytics__model-figures">
                                <span>{format!("{} requests", usage.requests)}</span>
                                <span>{format_cost(usage.cost)}</span>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>(),
        )
    };

    view! {
        <section class="card">
            <h3>"Usage Analytics"</h3>
            <p class="analytics__period">{period}</p>
            <div class="analytics__totals">
                <div class="analytics__stat">
                    <span class="analytics__label">"Total Requests"</span>
                    <span class="analytics__value">{analytics.totals.requests}</span>
                </div>
                <div class="analytics__stat">
                    <span class="analytics__label">"Total Tokens"</span>
                    <span class="analytics__value">{analytics.totals.total_tokens}</span>
                </div>
                <div class="analytics__stat">
                    <span class="analytics__label">"Total Cost"</span>
                    <span class="analytics__value">{format_cost(analytics.totals.total_cost)}</span>
                </div>
            </div>
            {breakdown
                .map(|rows| {
                    view! {
                        <div class="analytics__breakdown">
                            <h4>"Usage by Model"</h4>
                            {rows}
                        </div>
                    }
                })}
        </section>
    }
}
