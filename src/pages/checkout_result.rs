//! Landing page for a completed checkout.

use leptos::prelude::*;

/// Target of the `success_url` handed to the billing API. The new plan
/// shows up on the dashboard once the session re-fetches its snapshot.
#[component]
pub fn CheckoutSuccessPage() -> impl IntoView {
    view! {
        <div class="checkout-result">
            <div class="checkout-result__card">
                <h2>"Payment successful"</h2>
                <p>"Your subscription has been updated."</p>
                <a href="/" class="btn btn--primary">
                    "Back to dashboard"
                </a>
            </div>
        </div>
    }
}
