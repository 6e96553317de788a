//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the login page apply the same redirect rules, so the
//! decisions live here as pure functions with thin reactive wrappers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/dashboard/overview";

/// True once the session check has finished and nobody is signed in.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// True when the login page should bounce to the dashboard.
pub fn should_skip_login(state: &AuthState) -> bool {
    !state.loading && state.user.is_some()
}

/// Only admins see and use the user-management page.
pub fn can_manage_users(state: &AuthState) -> bool {
    state.user.as_ref().is_some_and(|u| u.role.is_admin())
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, replace());
        }
    });
}

/// Redirect to the dashboard whenever a session exists.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_skip_login(&auth.get()) {
            navigate(HOME_PATH, replace());
        }
    });
}

/// Drop the session from state and storage, then return to `/login`.
pub fn sign_out<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    crate::util::storage::clear_session();
    auth.set(AuthState::default());
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::services::auth::logout());
    navigate(LOGIN_PATH, replace());
}
