//! Mock login/logout against a fixed account list.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use super::ServiceError;
use super::latency;

/// Account role. Only admins may manage other users.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

/// The signed-in identity, as persisted to local storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
}

struct MockAccount {
    id: &'static str,
    username: &'static str,
    email: &'static str,
    password: &'static str,
    role: Role,
}

impl MockAccount {
    fn to_session(&self) -> SessionUser {
        SessionUser {
            id: self.id.to_owned(),
            username: self.username.to_owned(),
            email: self.email.to_owned(),
            role: self.role,
        }
    }
}

const MOCK_ACCOUNTS: [MockAccount; 2] = [
    MockAccount {
        id: "1",
        username: "admin",
        email: "admin@scansek.com",
        password: "admin123",
        role: Role::Admin,
    },
    MockAccount {
        id: "2",
        username: "user",
        email: "user@example.com",
        password: "user123",
        role: Role::User,
    },
];

/// Demo credentials shown on the login page.
pub const DEMO_CREDENTIALS: [(&str, &str); 2] = [("admin@scansek.com", "admin123"), ("user@example.com", "user123")];

/// Match credentials against the mock accounts.
///
/// Email comparison ignores ASCII case; the password must match exactly.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidCredentials`] when no account matches.
pub fn authenticate(email: &str, password: &str) -> Result<SessionUser, ServiceError> {
    let email = email.trim();
    MOCK_ACCOUNTS
        .iter()
        .find(|account| account.email.eq_ignore_ascii_case(email) && account.password == password)
        .map(MockAccount::to_session)
        .ok_or(ServiceError::InvalidCredentials)
}

/// Sign in after a simulated round trip.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidCredentials`] when no account matches.
pub async fn login(email: &str, password: &str) -> Result<SessionUser, ServiceError> {
    latency::simulate(latency::LOGIN_MS).await;
    let result = authenticate(email, password);
    match &result {
        Ok(user) => log::info!("login succeeded for {} ({})", user.email, user.role.label()),
        Err(e) => log::warn!("login rejected for {email}: {e}"),
    }
    result
}

/// Sign out after a simulated round trip. Never fails.
pub async fn logout() {
    latency::simulate(latency::LOGOUT_MS).await;
    log::info!("logout completed");
}
