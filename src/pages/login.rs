//! Login page with email/password form.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::state::auth::AuthState;

/// Login page. A successful login persists the fresh token pair, settles
/// the session, and returns the visitor to the location the gate recorded
/// in the `from` query parameter (or the dashboard).
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let do_submit = Callback::new(move |(): ()| {
        if busy.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        if email_value.trim().is_empty() || password_value.is_empty() {
            error.set(Some("Email and password are required".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            error.set(None);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(email_value.trim(), &password_value).await {
                    Ok(resp) => match (resp.user, resp.access_token, resp.refresh_token) {
                        (Some(user), Some(access), Some(refresh)) => {
                            crate::util::tokens::store_tokens(&access, &refresh);
                            auth.update(|a| a.set_user(Some(user)));
                            let target = query
                                .get_untracked()
                                .get("from")
                                .unwrap_or_else(|| "/".to_owned());
                            navigate(&target, NavigateOptions::default());
                        }
                        _ => {
                            busy.set(false);
                            error.set(Some(crate::net::api::GENERIC_ERROR.to_owned()));
                        }
                    },
                    Err(message) => {
                        busy.set(false);
                        error.set(Some(message));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, query, email_value, password_value);
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_submit.run(());
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1>"API Portal"</h1>
                <p class="auth-page__subtitle">"Sign in to your account"</p>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="banner banner--error">{message}</div> })
                }}

                <label class="auth-page__label">
                    "Email"
                    <input
                        class="auth-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input
                        class="auth-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                </label>

                <button
                    class="btn btn--primary auth-page__submit"
                    disabled=move || busy.get()
                    on:click=move |_| do_submit.run(())
                >
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>

                <p class="auth-page__alt">
                    "No account yet? " <a href="/register">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
