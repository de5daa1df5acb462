//! Last-fetched subscription snapshot shared across pages.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use crate::net::types::Subscription;

/// Subscription state: the most recent snapshot from the backend plus a
/// loading flag for the dashboard fetch.
#[derive(Clone, Debug, Default)]
pub struct SubscriptionState {
    pub current: Option<Subscription>,
    pub loading: bool,
}

impl SubscriptionState {
    /// Replace the snapshot wholesale. A failed refresh passes nothing and
    /// leaves the previous snapshot on screen.
    pub fn set_subscription(&mut self, subscription: Option<Subscription>) {
        self.current = subscription;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Optimistically count one request against the current period.
    /// No-op when no snapshot has been fetched yet.
    pub fn increment_usage(&mut self) {
        if let Some(current) = &mut self.current {
            current.requests_used += 1;
        }
    }
}
