//! Typed access to browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `localStorage` is the only persistence this app has. These helpers own the
//! key names and the hydrate-only `web-sys` glue, so pages never touch the
//! storage API directly. During the server render (and in native tests) reads
//! yield `None` and writes are no-ops.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Signed-in user (JSON).
pub const USER_KEY: &str = "user";
/// Chosen onboarding path (`roommate`, `seeker`, `host`).
pub const USER_PATH_KEY: &str = "userPath";
/// Chosen living plan (`basic`, `comfort`, `elite`).
pub const LIVING_PLAN_KEY: &str = "livingPlan";
/// Matched profile ids (JSON array).
pub const USER_MATCHES_KEY: &str = "userMatches";
/// Daily swipe counter (JSON `{date, count}`).
pub const DAILY_SWIPES_KEY: &str = "dailySwipes";

/// Keys removed on logout. `dailySwipes` survives so logging out cannot reset the quota.
pub const SESSION_KEYS: [&str; 4] = [USER_KEY, USER_PATH_KEY, LIVING_PLAN_KEY, USER_MATCHES_KEY];

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a raw string value for `key`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a raw string value for `key`.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            leptos::logging::warn!("localStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Load a JSON value for `key`. Malformed JSON reads as absent.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_string(key)?;
    decode(key, &raw)
}

/// Save a JSON value for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => save_string(key, &raw),
        Err(e) => leptos::logging::warn!("failed to encode {key}: {e}"),
    }
}

/// Remove `key` if present.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Remove every per-session key.
pub fn clear_session() {
    for key in SESSION_KEYS {
        remove(key);
    }
}

/// Remove every key the app owns, including the swipe counter.
pub fn clear_all() {
    clear_session();
    remove(DAILY_SWIPES_KEY);
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::warn!("ignoring malformed {key} in storage: {e}");
            None
        }
    }
}
