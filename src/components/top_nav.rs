//! Top navigation bar for authenticated pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Navigation bar with page links, the signed-in identity, and logout.
///
/// Logout clears the in-memory session, deletes the persisted token pair,
/// and returns the visitor to the login page.
#[component]
pub fn TopNav() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let user_name = move || {
        auth.get()
            .user
            .map(|u| u.name)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        crate::util::tokens::clear_tokens();
        auth.update(AuthState::clear);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="top-nav">
            <a href="/" class="top-nav__brand">
                "API Portal"
            </a>
            <nav class="top-nav__links">
                <a href="/" class="top-nav__link">
                    "Dashboard"
                </a>
                <a href="/pricing" class="top-nav__link">
                    "Pricing"
                </a>
                <a href="/account" class="top-nav__link">
                    "Account"
                </a>
            </nav>
            <span class="top-nav__spacer"></span>
            <span class="top-nav__user">{user_name}</span>
            <button class="btn btn--ghost top-nav__logout" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
