use super::*;
use crate::services::auth::Role;

fn admin() -> SessionUser {
    SessionUser {
        id: "1".to_owned(),
        username: "admin".to_owned(),
        email: "admin@scansek.com".to_owned(),
        role: Role::Admin,
    }
}

// =============================================================
// AuthState lifecycle
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn restoring_is_loading() {
    let state = AuthState::restoring();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn restored_clears_loading() {
    let state = AuthState::restored(Some(admin()));
    assert!(!state.loading);
    assert_eq!(state.username(), Some("admin"));
    assert_eq!(state.user_id(), Some("1"));
    assert_eq!(AuthState::restored(None), AuthState::default());
}
