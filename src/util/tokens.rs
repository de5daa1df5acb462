//! Persisted bearer token pair backed by `localStorage`.
//!
//! The pair is written after a successful login or registration, read once
//! per verification attempt, and deleted on verification failure or
//! logout. Tokens are opaque strings; the client never inspects them.
//! Requires a browser environment; on the server every read is `None`.

#[cfg(feature = "hydrate")]
const AUTH_TOKEN_KEY: &str = "authToken";
#[cfg(feature = "hydrate")]
const REFRESH_TOKEN_KEY: &str = "refreshToken";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted access token, if any.
pub fn read_auth_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(AUTH_TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read the persisted refresh token, if any.
pub fn read_refresh_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(REFRESH_TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a freshly minted token pair. Best effort; a full storage quota
/// simply leaves the visitor logged out on the next page load.
pub fn store_tokens(access_token: &str, refresh_token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(AUTH_TOKEN_KEY, access_token);
            let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh_token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_token, refresh_token);
    }
}

/// Delete both persisted token entries.
pub fn clear_tokens() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(AUTH_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}
