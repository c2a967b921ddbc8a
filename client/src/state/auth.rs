//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use bank_types::User;

use crate::util::session::StoredSession;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the stored session has been looked up.
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the stored session has been read.
    pub fn restoring() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(session: StoredSession) -> Self {
        Self {
            user: Some(session.user),
            loading: false,
        }
    }

    /// Display name for the header greeting.
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.username.as_str())
    }
}
