//! Form validation for the record modal and the login form.
//!
//! Inputs arrive as raw strings straight from `<input>` values; validation
//! either produces a typed value or one message per offending field.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::services::sugar::{RecordDraft, SugarRecord};

const MIN_FOOD_NAME_CHARS: usize = 2;

/// Raw record modal fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordForm {
    pub food_name: String,
    pub sugar_per_package: String,
    pub package_count: String,
}

impl Default for RecordForm {
    fn default() -> Self {
        Self { food_name: String::new(), sugar_per_package: "0".to_owned(), package_count: "1".to_owned() }
    }
}

impl RecordForm {
    /// Prefill for editing an existing record.
    pub fn from_record(record: &SugarRecord) -> Self {
        Self {
            food_name: record.food_name.clone(),
            sugar_per_package: record.sugar_per_package.to_string(),
            package_count: record.package_count.to_string(),
        }
    }
}

/// Per-field messages; `None` means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordFormErrors {
    pub food_name: Option<&'static str>,
    pub sugar_per_package: Option<&'static str>,
    pub package_count: Option<&'static str>,
}

impl RecordFormErrors {
    pub fn is_empty(&self) -> bool {
        self.food_name.is_none() && self.sugar_per_package.is_none() && self.package_count.is_none()
    }
}

fn check_food_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Food name is required");
    }
    if name.chars().count() < MIN_FOOD_NAME_CHARS {
        return Err("Food name must be at least 2 characters");
    }
    Ok(name.to_owned())
}

fn check_sugar(raw: &str) -> Result<f64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Sugar amount is required");
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        Ok(_) => Err("Sugar amount must be positive"),
        Err(_) => Err("Sugar amount must be a number"),
    }
}

fn check_package_count(raw: &str) -> Result<u32, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Package count is required");
    }
    match raw.parse::<i64>() {
        Ok(count) if count >= 1 => u32::try_from(count).map_err(|_| "Package count is too large"),
        Ok(_) => Err("At least 1 package is required"),
        Err(_) => Err("Package count must be a whole number"),
    }
}

/// Validate every field, reporting all failures at once.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_record_form(form: &RecordForm) -> Result<RecordDraft, RecordFormErrors> {
    let food_name = check_food_name(&form.food_name);
    let sugar = check_sugar(&form.sugar_per_package);
    let count = check_package_count(&form.package_count);
    match (food_name, sugar, count) {
        (Ok(food_name), Ok(sugar_per_package), Ok(package_count)) => {
            Ok(RecordDraft { food_name, sugar_per_package, package_count })
        }
        (food_name, sugar, count) => Err(RecordFormErrors {
            food_name: food_name.err(),
            sugar_per_package: sugar.err(),
            package_count: count.err(),
        }),
    }
}

/// Login form problems, first failure wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginFormError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
}

/// Trimmed email when the form is complete.
///
/// # Errors
///
/// The first missing or malformed field.
pub fn validate_login(email: &str, password: &str) -> Result<String, LoginFormError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(LoginFormError::EmailRequired);
    }
    if !email.contains('@') {
        return Err(LoginFormError::EmailInvalid);
    }
    if password.is_empty() {
        return Err(LoginFormError::PasswordRequired);
    }
    Ok(email.to_owned())
}
