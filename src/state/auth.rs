//! Session state: who is logged in, and whether that is still being
//! determined.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// Owned by the root component as an `RwSignal` context; pages and guards
/// read it and dispatch the transitions below. `authenticated` is always
/// derived from `user`, never written directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub authenticated: bool,
    pub loading: bool,
}

impl Default for AuthState {
    /// A fresh page load: nobody is known yet and one verification attempt
    /// is pending, so `loading` starts true.
    fn default() -> Self {
        Self {
            user: None,
            authenticated: false,
            loading: true,
        }
    }
}

impl AuthState {
    /// Replace the user snapshot wholesale and settle the pending
    /// verification attempt.
    pub fn set_user(&mut self, user: Option<User>) {
        self.authenticated = user.is_some();
        self.user = user;
        self.loading = false;
    }

    /// Toggle the loading flag only; the user snapshot is untouched.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Logout transition. Deleting the persisted token pair is the
    /// caller's side of this transition (`util::tokens::clear_tokens`).
    pub fn clear(&mut self) {
        self.user = None;
        self.authenticated = false;
        self.loading = false;
    }
}
