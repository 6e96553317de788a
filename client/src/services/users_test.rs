use super::*;

#[test]
fn directory_seeds_eight_accounts() {
    let directory = UserDirectory::default();
    let names: Vec<_> = directory.accounts().iter().map(|u| u.username.as_str()).collect();
    assert_eq!(
        names,
        ["admin", "testuser", "johndoe", "janesmith", "sarahjones", "mikebrown", "emilygreen", "alexwilson"]
    );
}

#[test]
fn seeded_timestamps_are_parsed() {
    let directory = UserDirectory::default();
    let admin = &directory.accounts()[0];
    assert_eq!(admin.registered_at.to_rfc3339(), "2025-01-01T10:00:00+00:00");
    assert_eq!(admin.last_login.map(|t| t.to_rfc3339()).as_deref(), Some("2025-03-15T08:30:00+00:00"));
    assert!(directory.accounts()[2].last_login.is_none());
}

#[test]
fn unverified_accounts_never_logged_in() {
    let directory = UserDirectory::default();
    for account in directory.accounts().iter().filter(|u| !u.is_verified) {
        assert!(account.last_login.is_none(), "{}", account.username);
    }
}

#[test]
fn set_verified_updates_and_returns_account() {
    let mut directory = UserDirectory::default();
    let updated = directory.set_verified("3", true).unwrap();
    assert!(updated.is_verified);
    assert!(directory.accounts()[2].is_verified);
}

#[test]
fn set_verified_unknown_user_fails() {
    let mut directory = UserDirectory::default();
    assert_eq!(directory.set_verified("99", true), Err(ServiceError::UserNotFound));
}

#[test]
fn ensure_exists_checks_ids() {
    let directory = UserDirectory::default();
    assert_eq!(directory.ensure_exists("8"), Ok(()));
    assert_eq!(directory.ensure_exists("0"), Err(ServiceError::UserNotFound));
}

#[test]
fn search_matches_username_email_or_id() {
    let directory = UserDirectory::default();
    let jane = &directory.accounts()[3];
    assert!(jane.matches_search("JANE"));
    assert!(jane.matches_search("jane@example"));
    assert!(jane.matches_search("4"));
    assert!(jane.matches_search("   "));
    assert!(!jane.matches_search("mike"));
}

#[test]
fn service_changes_are_visible_to_clones() {
    let service = UserService::default();
    let other = service.clone();
    futures::executor::block_on(async {
        service.set_verified("5", true).await.unwrap();
        let users = other.fetch_users().await;
        assert!(users.iter().find(|u| u.id == "5").unwrap().is_verified);
    });
}

#[test]
fn reset_password_requires_known_user() {
    let service = UserService::default();
    futures::executor::block_on(async {
        assert_eq!(service.reset_password("2").await, Ok(()));
        assert_eq!(service.reset_password("nope").await, Err(ServiceError::UserNotFound));
    });
}
