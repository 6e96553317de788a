//! Browser `localStorage` access and the persisted login session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only state that survives a reload is the logged-in user, stored as
//! JSON under [`SESSION_KEY`]. Outside the browser (SSR, tests) every read
//! misses and every write is dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::services::auth::SessionUser;

/// Storage key of the persisted [`SessionUser`].
pub const SESSION_KEY: &str = "scansek_user";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
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

/// Serialize `value` as JSON under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        match serde_json::to_string(value) {
            Ok(raw) => {
                let _ = storage.set_item(key, &raw);
            }
            Err(e) => log::warn!("could not serialize {key}: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

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

/// Decode a JSON value, `None` when the text is not a valid `T`.
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

/// Decode a stored session.
pub fn parse_session(raw: &str) -> Option<SessionUser> {
    parse_json(raw)
}

/// Restore the stored session. A corrupt entry is discarded.
pub fn load_session() -> Option<SessionUser> {
    let raw = load_raw(SESSION_KEY)?;
    let session = parse_session(&raw);
    if session.is_none() {
        log::warn!("discarding unreadable stored session");
        remove(SESSION_KEY);
    }
    session
}

pub fn save_session(user: &SessionUser) {
    save_json(SESSION_KEY, user);
}

pub fn clear_session() {
    remove(SESSION_KEY);
}
