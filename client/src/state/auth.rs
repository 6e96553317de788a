//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::services::auth::SessionUser;

/// The signed-in user plus whether the stored session is still being read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state on app start, before the stored session is checked.
    pub fn restoring() -> Self {
        Self { user: None, loading: true }
    }

    /// Finish the session check with whatever was found.
    pub fn restored(user: Option<SessionUser>) -> Self {
        Self { user, loading: false }
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}
