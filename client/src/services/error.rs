use chrono::NaiveDate;

/// Errors returned by the mock services.
///
/// Display strings are shown to the user verbatim in notifications.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// No mock account matches the submitted email/password pair.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The user id is not present in the addressed store.
    #[error("User not found")]
    UserNotFound,

    /// The record id is not present in the user's history.
    #[error("Record not found")]
    RecordNotFound,

    /// A statistics range whose start is after its end.
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },
}
