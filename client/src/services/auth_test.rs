use super::*;

#[test]
fn authenticate_admin_returns_admin_role() {
    let user = authenticate("admin@scansek.com", "admin123").unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.username, "admin");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn authenticate_ignores_email_case_and_whitespace() {
    let user = authenticate("  USER@Example.COM ", "user123").unwrap();
    assert_eq!(user.id, "2");
    assert_eq!(user.role, Role::User);
}

#[test]
fn authenticate_password_is_case_sensitive() {
    assert_eq!(authenticate("admin@scansek.com", "ADMIN123"), Err(ServiceError::InvalidCredentials));
}

#[test]
fn authenticate_unknown_email_is_rejected() {
    assert_eq!(authenticate("nobody@example.com", "admin123"), Err(ServiceError::InvalidCredentials));
}

#[test]
fn authenticate_rejects_password_of_other_account() {
    assert_eq!(authenticate("admin@scansek.com", "user123"), Err(ServiceError::InvalidCredentials));
}

#[test]
fn invalid_credentials_message_is_user_facing() {
    assert_eq!(ServiceError::InvalidCredentials.to_string(), "Invalid email or password");
}

#[test]
fn session_user_serializes_without_password() {
    let user = authenticate("admin@scansek.com", "admin123").unwrap();
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "1",
            "username": "admin",
            "email": "admin@scansek.com",
            "role": "admin"
        })
    );
}

#[test]
fn demo_credentials_all_authenticate() {
    for (email, password) in DEMO_CREDENTIALS {
        assert!(authenticate(email, password).is_ok(), "{email} should sign in");
    }
}

#[test]
fn login_future_resolves_without_browser_timer() {
    let user = futures::executor::block_on(login("user@example.com", "user123")).unwrap();
    assert_eq!(user.username, "user");
}

#[test]
fn role_helpers() {
    assert!(Role::Admin.is_admin());
    assert!(!Role::User.is_admin());
    assert_eq!(Role::User.label(), "user");
}
