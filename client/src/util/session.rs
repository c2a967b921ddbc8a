//! Persisted sign-in session.
//!
//! The bearer token and user identity are stored as JSON in `localStorage` so a
//! reload keeps the user signed in. Requires a browser environment; SSR paths
//! report no session and ignore writes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use bank_types::{AuthResponse, User};
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "bankdash_session";

/// Token and identity returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
}

impl From<&AuthResponse> for StoredSession {
    fn from(resp: &AuthResponse) -> Self {
        Self {
            token: resp.token.clone(),
            user: resp.user(),
        }
    }
}

/// Serialize a session for storage.
pub fn encode(session: &StoredSession) -> Option<String> {
    serde_json::to_string(session).ok()
}

/// Parse a stored session; blank tokens count as no session.
pub fn decode(raw: &str) -> Option<StoredSession> {
    let session: StoredSession = serde_json::from_str(raw).ok()?;
    if session.token.trim().is_empty() {
        return None;
    }
    Some(session)
}

/// Read the stored session, if any.
pub fn load() -> Option<StoredSession> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        decode(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Bearer token of the stored session, if any.
pub fn token() -> Option<String> {
    load().map(|session| session.token)
}

/// Whether `stored` is still the session that was issued `token`.
///
/// A rejection for an older token must not wipe a session created after it.
pub fn is_current(stored: Option<&str>, token: &str) -> bool {
    stored == Some(token)
}

/// Persist `session`, replacing any previous one.
pub fn save(session: &StoredSession) {
    #[cfg(feature = "hydrate")]
    {
        let Some(raw) = encode(session) else {
            return;
        };
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Forget the stored session.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
