//! Registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::state::auth::AuthState;

/// Minimum password length accepted by the backend.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate the form before any network call; returns the first problem.
pub fn registration_error(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Option<&'static str> {
    if name.trim().is_empty() || email.trim().is_empty() {
        return Some("Name and email are required");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Some("Password must be at least 8 characters");
    }
    if password != confirm {
        return Some("Passwords do not match");
    }
    None
}

/// Registration page. Success behaves like a login: the minted token pair
/// is persisted and the session settles on the new user.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let do_submit = Callback::new(move |(): ()| {
        if busy.get() {
            return;
        }
        let name_value = name.get();
        let email_value = email.get();
        let password_value = password.get();
        if let Some(problem) =
            registration_error(&name_value, &email_value, &password_value, &confirm.get())
        {
            error.set(Some(problem.to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            error.set(None);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::register(
                    name_value.trim(),
                    email_value.trim(),
                    &password_value,
                )
                .await;
                match result {
                    Ok(resp) => match (resp.user, resp.access_token, resp.refresh_token) {
                        (Some(user), Some(access), Some(refresh)) => {
                            crate::util::tokens::store_tokens(&access, &refresh);
                            auth.update(|a| a.set_user(Some(user)));
                            navigate("/", NavigateOptions::default());
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
            let _ = (auth, name_value, email_value, password_value);
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
                <h1>"Create your account"</h1>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="banner banner--error">{message}</div> })
                }}

                <label class="auth-page__label">
                    "Name"
                    <input
                        class="auth-page__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                </label>
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
                <label class="auth-page__label">
                    "Confirm Password"
                    <input
                        class="auth-page__input"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                </label>

                <button
                    class="btn btn--primary auth-page__submit"
                    disabled=move || busy.get()
                    on:click=move |_| do_submit.run(())
                >
                    {move || if busy.get() { "Creating account..." } else { "Create account" }}
                </button>

                <p class="auth-page__alt">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
