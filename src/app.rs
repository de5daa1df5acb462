//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    account::AccountPage, checkout_result::CheckoutSuccessPage, dashboard::DashboardPage,
    login::LoginPage, pricing::PricingPage, register::RegisterPage,
};
use crate::state::{auth::AuthState, subscription::SubscriptionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session and subscription state contexts and sets up
/// client-side routing. Protected pages are wrapped in [`ProtectedRoute`],
/// which settles the session exactly once per page load.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let subscription = RwSignal::new(SubscriptionState::default());

    provide_context(auth);
    provide_context(subscription);

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="API Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <DashboardPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("pricing")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <PricingPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("account")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <AccountPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("subscription"), StaticSegment("success"))
                    view=CheckoutSuccessPage
                />
            </Routes>
        </Router>
    }
}
