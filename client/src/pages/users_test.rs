use super::*;
use crate::services::users::UserDirectory;

fn seeded() -> Vec<UserAccount> {
    UserDirectory::default().accounts().to_vec()
}

// =============================================================
// search_users
// =============================================================

#[test]
fn blank_search_lists_everyone() {
    assert_eq!(search_users(&seeded(), "   ").len(), 8);
}

#[test]
fn search_matches_username_email_and_id() {
    let accounts = seeded();
    let by_name: Vec<_> = search_users(&accounts, "JANE").into_iter().map(|u| u.id).collect();
    assert_eq!(by_name, ["4"]);

    let by_email: Vec<_> = search_users(&accounts, "scansek.com").into_iter().map(|u| u.username).collect();
    assert_eq!(by_email, ["admin"]);

    let by_id: Vec<_> = search_users(&accounts, "7").into_iter().map(|u| u.username).collect();
    assert_eq!(by_id, ["emilygreen"]);
}

#[test]
fn search_without_hits_is_empty() {
    assert!(search_users(&seeded(), "nobody-here").is_empty());
}

// =============================================================
// replace_account
// =============================================================

#[test]
fn replace_account_swaps_matching_id() {
    let mut accounts = seeded();
    let mut updated = accounts[2].clone();
    updated.is_verified = true;

    assert!(replace_account(&mut accounts, updated));
    assert!(accounts[2].is_verified);
    assert_eq!(accounts.len(), 8);
}

#[test]
fn replace_account_ignores_unknown_id() {
    let mut accounts = seeded();
    let mut stranger = accounts[0].clone();
    stranger.id = "99".to_owned();

    assert!(!replace_account(&mut accounts, stranger));
    assert_eq!(accounts, seeded());
}

#[test]
fn verification_messages() {
    assert_eq!(verification_message(true), "User verified successfully");
    assert_eq!(verification_message(false), "User unverified successfully");
}

#[test]
fn directory_pages_hold_ten_rows() {
    let pagination = Pagination::new(USERS_PAGE_SIZE, 8);
    assert_eq!(pagination.page_count(), 1);
    assert_eq!(pagination.summary(), "Showing 1 to 8 of 8 results");
}

#[test]
fn fetched_directory_fills_the_first_page() {
    let accounts = futures::executor::block_on(UserService::default().fetch_users());
    assert_eq!(accounts, seeded());

    let pagination = Pagination::new(USERS_PAGE_SIZE, accounts.len());
    assert_eq!(pagination.slice(&accounts).len(), 8);
    assert_eq!(search_users(&accounts, "jane").len(), 1);
}
