//! Mock user directory for the user-management page.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ServiceError;
use super::latency;

/// A registered account as listed by the admin directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_verified: bool,
    pub registered_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl UserAccount {
    /// Case-insensitive match of `term` against username, email or id.
    /// A blank term matches everyone.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.username.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.id.to_lowercase().contains(&term)
    }
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn account(
    id: &str,
    username: &str,
    email: &str,
    is_verified: bool,
    registered_at: DateTime<Utc>,
    last_login: Option<DateTime<Utc>>,
) -> UserAccount {
    UserAccount {
        id: id.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
        is_verified,
        registered_at,
        last_login,
    }
}

fn seed_accounts() -> Vec<UserAccount> {
    vec![
        account("1", "admin", "admin@scansek.com", true, at(2025, 1, 1, 10, 0), Some(at(2025, 3, 15, 8, 30))),
        account("2", "testuser", "user@example.com", true, at(2025, 1, 15, 14, 20), Some(at(2025, 3, 14, 16, 45))),
        account("3", "johndoe", "john@example.com", false, at(2025, 2, 5, 9, 15), None),
        account("4", "janesmith", "jane@example.com", true, at(2025, 2, 20, 11, 30), Some(at(2025, 3, 10, 10, 20))),
        account("5", "sarahjones", "sarah@example.com", false, at(2025, 3, 1, 15, 45), None),
        account("6", "mikebrown", "mike@example.com", true, at(2025, 3, 5, 8, 10), Some(at(2025, 3, 12, 14, 30))),
        account("7", "emilygreen", "emily@example.com", true, at(2025, 3, 8, 16, 20), Some(at(2025, 3, 13, 9, 15))),
        account("8", "alexwilson", "alex@example.com", false, at(2025, 3, 10, 10, 30), None),
    ]
}

/// The mutable account list behind [`UserService`].
#[derive(Debug)]
pub struct UserDirectory {
    accounts: Vec<UserAccount>,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self { accounts: seed_accounts() }
    }
}

impl UserDirectory {
    pub fn accounts(&self) -> &[UserAccount] {
        &self.accounts
    }

    fn find_mut(&mut self, user_id: &str) -> Result<&mut UserAccount, ServiceError> {
        self.accounts
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(ServiceError::UserNotFound)
    }

    /// # Errors
    ///
    /// [`ServiceError::UserNotFound`] for an unknown id.
    pub fn set_verified(&mut self, user_id: &str, verified: bool) -> Result<UserAccount, ServiceError> {
        let account = self.find_mut(user_id)?;
        account.is_verified = verified;
        Ok(account.clone())
    }

    /// # Errors
    ///
    /// [`ServiceError::UserNotFound`] for an unknown id.
    pub fn ensure_exists(&self, user_id: &str) -> Result<(), ServiceError> {
        if self.accounts.iter().any(|u| u.id == user_id) {
            Ok(())
        } else {
            Err(ServiceError::UserNotFound)
        }
    }
}

/// Clonable async handle over a shared [`UserDirectory`].
#[derive(Clone, Debug, Default)]
pub struct UserService {
    directory: Arc<Mutex<UserDirectory>>,
}

impl UserService {
    fn lock(&self) -> MutexGuard<'_, UserDirectory> {
        self.directory.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// List every account.
    pub async fn fetch_users(&self) -> Vec<UserAccount> {
        latency::simulate(latency::FETCH_MS).await;
        self.lock().accounts().to_vec()
    }

    /// Flip an account's verification flag.
    ///
    /// # Errors
    ///
    /// [`ServiceError::UserNotFound`] for an unknown id.
    pub async fn set_verified(&self, user_id: &str, verified: bool) -> Result<UserAccount, ServiceError> {
        latency::simulate(latency::MUTATE_MS).await;
        let result = self.lock().set_verified(user_id, verified);
        match &result {
            Ok(_) => log::info!("user {user_id} verified={verified}"),
            Err(e) => log::warn!("verification change for {user_id} failed: {e}"),
        }
        result
    }

    /// Pretend to send a password-reset email.
    ///
    /// # Errors
    ///
    /// [`ServiceError::UserNotFound`] for an unknown id.
    pub async fn reset_password(&self, user_id: &str) -> Result<(), ServiceError> {
        latency::simulate(latency::MUTATE_MS).await;
        self.lock().ensure_exists(user_id)?;
        log::info!("password reset requested for user {user_id}");
        Ok(())
    }
}
