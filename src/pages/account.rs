//! Account settings: profile, subscription management, password change,
//! and billing history.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;

use crate::components::top_nav::TopNav;
use crate::net::types::HistoryEntry;
use crate::pages::register::MIN_PASSWORD_LEN;
use crate::state::auth::AuthState;

/// Outcome banner shown under the form that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Banner {
    is_error: bool,
    text: String,
}

/// Validate a password change before any network call; returns the first
/// problem. Order matches the form: confirmation first, then strength.
pub fn password_change_error(new_password: &str, confirm: &str) -> Option<&'static str> {
    if new_password != confirm {
        return Some("New passwords do not match");
    }
    if new_password.len() < MIN_PASSWORD_LEN {
        return Some("Password must be at least 8 characters");
    }
    None
}

/// Whether the subscription can be canceled from here: a paid plan that is
/// currently active.
pub fn can_cancel(plan: &str, status: Option<&str>) -> bool {
    plan != crate::config::FREE_PLAN_ID && status == Some("active")
}

/// Account settings page.
#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let changing = RwSignal::new(false);
    let banner = RwSignal::new(None::<Banner>);

    let history = LocalResource::new(|| async {
        let Some(token) = crate::util::tokens::read_auth_token() else {
            return Vec::new();
        };
        match crate::net::api::fetch_history(&token, Some(10)).await {
            Some(entries) => entries,
            None => {
                #[cfg(feature = "hydrate")]
                log::error!("subscription history fetch failed");
                Vec::new()
            }
        }
    });

    let do_change_password = Callback::new(move |(): ()| {
        if changing.get() {
            return;
        }
        banner.set(None);

        let old_value = old_password.get();
        let new_value = new_password.get();
        if let Some(problem) = password_change_error(&new_value, &confirm_password.get()) {
            banner.set(Some(Banner {
                is_error: true,
                text: problem.to_owned(),
            }));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            changing.set(true);
            leptos::task::spawn_local(async move {
                let Some(token) = crate::util::tokens::read_auth_token() else {
                    changing.set(false);
                    banner.set(Some(Banner {
                        is_error: true,
                        text: "Please sign in again".to_owned(),
                    }));
                    return;
                };
                let result =
                    crate::net::api::change_password(&token, &old_value, &new_value).await;
                changing.set(false);
                match result {
                    Ok(text) => {
                        old_password.set(String::new());
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                        banner.set(Some(Banner {
                            is_error: false,
                            text,
                        }));
                    }
                    Err(text) => banner.set(Some(Banner {
                        is_error: true,
                        text,
                    })),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (old_value, new_value);
        }
    });

    let do_cancel = Callback::new(move |(): ()| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message("Are you sure you want to cancel your subscription?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                let Some(token) = crate::util::tokens::read_auth_token() else {
                    return;
                };
                match crate::net::api::cancel_subscription(&token).await {
                    Ok(_) => {
                        // Reload so the session re-verifies against the
                        // downgraded account.
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }
                    Err(text) => banner.set(Some(Banner {
                        is_error: true,
                        text,
                    })),
                }
            });
        }
    });

    view! {
        <div class="account-page">
            <TopNav/>
            <main class="account-page__body">
                <h2>"Account Settings"</h2>

                {move || {
                    auth.get()
                        .user
                        .map(|user| {
                            let show_cancel = can_cancel(
                                &user.subscription_plan,
                                user.subscription_status.as_deref(),
                            );
                            view! {
                                <section class="card">
                                    <h3>"Account Information"</h3>
                                    <dl class="account-page__info">
                                        <dt>"Email"</dt>
                                        <dd>{user.email}</dd>
                                        <dt>"Name"</dt>
                                        <dd>{user.name}</dd>
                                        <dt>"User ID"</dt>
                                        <dd class="account-page__mono">{user.user_id}</dd>
                                    </dl>
                                </section>
                                <section class="card">
                                    <h3>"Subscription"</h3>
                                    <dl class="account-page__info">
                                        <dt>"Current Plan"</dt>
                                        <dd>{user.subscription_plan}</dd>
                                        {user
                                            .subscription_status
                                            .map(|status| {
                                                view! {
                                                    <dt>"Status"</dt>
                                                    <dd>{status}</dd>
                                                }
                                            })}
                                    </dl>
                                    <Show when=move || show_cancel>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| do_cancel.run(())
                                        >
                                            "Cancel Subscription"
                                        </button>
                                    </Show>
                                </section>
                            }
                        })
                }}

                <section class="card">
                    <h3>"Change Password"</h3>

                    {move || {
                        banner
                            .get()
                            .map(|banner| {
                                let class = if banner.is_error {
                                    "banner banner--error"
                                } else {
                                    "banner banner--success"
                                };
                                view! { <div class=class>{banner.text}</div> }
                            })
                    }}

                    <label class="account-page__label">
                        "Current Password"
                        <input
                            class="account-page__input"
                            type="password"
                            prop:value=move || old_password.get()
                            on:input=move |ev| old_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="account-page__label">
                        "New Password"
                        <input
                            class="account-page__input"
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="account-page__label">
                        "Confirm New Password"
                        <input
                            class="account-page__input"
                            type="password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="btn btn--primary"
                        disabled=move || changing.get()
                        on:click=move |_| do_change_password.run(())
                    >
                        {move || {
                            if changing.get() { "Changing Password..." } else { "Change Password" }
                        }}
                    </button>
                </section>

                <section class="card">
                    <h3>"Billing History"</h3>
                    <Suspense fallback=move || {
                        view! { <p class="account-page__muted">"Loading history..."</p> }
                    }>
                        {move || {
                            history
                                .get()
                                .map(|entries| {
                                    if entries.is_empty() {
                                        view! {
                                            <p class="account-page__muted">
                                                "No billing history yet."
                                            </p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="account-page__history">
                                                {entries
                                                    .into_iter()
                                                    .map(history_row)
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </section>
            </main>
        </div>
    }
}

fn history_row(entry: HistoryEntry) -> impl IntoView {
    let amount = entry.amount.map(|amount| format!("${amount:.2}"));
    let date = entry
        .created_at
        .map(|ts| crate::pages::dashboard::display_date(&ts).to_owned());

    view! {
        <div class="account-page__history-row">
            <span class="account-page__history-action">
                {format!("{} ({})", entry.action, entry.subscription_plan)}
            </span>
            <span class="account-page__history-amount">{amount}</span>
            <span class="account-page__history-date">{date}</span>
        </div>
    }
}
