//! Session gate wrapping every page that requires a logged-in user.
//!
//! On mount the session is unsettled (`loading` is true) and exactly one
//! verification attempt runs: read the persisted access token, and if one
//! exists ask the Identity API who it belongs to. Any outcome other than a
//! confirmed user settles the session as unauthenticated and deletes the
//! persisted token pair; an unreachable backend and a rejected credential
//! are indistinguishable to the visitor. A settled session never
//! re-verifies; a fresh login elsewhere flips `loading` back on first.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::net::types::User;

/// What the gate shows for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Verification still pending: neutral loading view, no redirect.
    Wait,
    /// Settled unauthenticated: send the visitor to the login page.
    RedirectToLogin,
    /// Settled authenticated: render the protected children.
    Render,
}

/// Decide the gate's rendering from the two session flags.
pub fn gate_decision(authenticated: bool, loading: bool) -> GateDecision {
    if loading {
        GateDecision::Wait
    } else if authenticated {
        GateDecision::Render
    } else {
        GateDecision::RedirectToLogin
    }
}

/// Verification runs only while the session is unsettled and nobody is
/// known, i.e. at most once per mount.
pub fn should_verify(authenticated: bool, loading: bool) -> bool {
    !authenticated && loading
}

/// Fast path for a visitor with no persisted token: settle as
/// unauthenticated without a network round trip.
pub fn apply_missing_token(auth: &mut AuthState) {
    auth.set_loading(false);
}

/// Apply a settled verification outcome. Returns `true` when the persisted
/// token pair must be deleted (every outcome that produced no user).
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
fn apply_verification(auth: &mut AuthState, user: Option<crate::net::types::User>) -> bool {
    let rejected = user.is_none();
    auth.set_user(user);
    rejected
}

/// Login URL carrying the originally requested location, so a successful
/// login can return there.
pub fn login_redirect_target(pathname: &str, search: &str) -> String {
    let mut from = String::from(pathname);
    from.push_str(search);
    if from.is_empty() || from == "/" {
        return "/login".to_owned();
    }
    format!("/login?from={}", encode_query_component(&from))
}

/// Percent-encode the characters that would break a query value; the rest
/// of the path survives round-tripping through the router untouched.
fn encode_query_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '%' => out.push_str("%25"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            '=' => out.push_str("%3D"),
            '#' => out.push_str("%23"),
            '+' => out.push_str("%2B"),
            ' ' => out.push_str("%20"),
            _ => out.push(c),
        }
    }
    out
}

/// Run one verification attempt and settle the session.
#[cfg(feature = "hydrate")]
async fn verify_session(auth: RwSignal<AuthState>) {
    let Some(token) = crate::util::tokens::read_auth_token() else {
        auth.update(apply_missing_token);
        return;
    };

    let user: Option<User> = crate::net::api::fetch_current_user(&token).await;
    let mut clear = false;
    auth.update(|a| clear = apply_verification(a, user));
    if clear {
        log::warn!("session verification failed, clearing stored tokens");
        crate::util::tokens::clear_tokens();
    }
}

/// Gate component: children render only for a verified session.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    // Kick off verification while the session is unsettled. The `loading`
    // flag keeps this to one attempt per mount.
    Effect::new(move || {
        let state = auth.get();
        #[cfg(feature = "hydrate")]
        {
            if should_verify(state.authenticated, state.loading) {
                leptos::task::spawn_local(verify_session(auth));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = state;
        }
    });

    // Redirect once settled unauthenticated, carrying the requested
    // location.
    Effect::new(move || {
        let state = auth.get();
        if gate_decision(state.authenticated, state.loading) == GateDecision::RedirectToLogin {
            let target = login_redirect_target(
                &location.pathname.get_untracked(),
                &location.search.get_untracked(),
            );
            navigate(&target, NavigateOptions::default());
        }
    });

    view! {
        {move || {
            let state = auth.get();
            match gate_decision(state.authenticated, state.loading) {
                GateDecision::Render => children().into_any(),
                // The redirect effect handles navigation; keep the neutral
                // view up until the route changes.
                GateDecision::Wait | GateDecision::RedirectToLogin => view! {
                    <div class="gate-loading">
                        <div class="gate-loading__spinner"></div>
                    </div>
                }
                .into_any(),
            }
        }}
    }
}
