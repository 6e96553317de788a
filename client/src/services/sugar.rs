//! Mock sugar-history store.
//!
//! DESIGN
//! ======
//! Records live in a per-user map seeded with random scans the first time any
//! call touches the store. Mutations are scoped to the selected user id except
//! delete, which sweeps every user's list. Nothing outlives the page.

#[cfg(test)]
#[path = "sugar_test.rs"]
mod sugar_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Days, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::latency;
use super::{ServiceError, clock_rng};
use crate::util::format::round_to;

/// Grams of sugar in one teaspoon.
pub const GRAMS_PER_TEASPOON: f64 = 4.0;

const FOOD_ITEMS: [&str; 15] = [
    "Chocolate Bar",
    "Soda",
    "Cereal",
    "Yogurt",
    "Candy",
    "Cookies",
    "Ice Cream",
    "Granola Bar",
    "Fruit Juice",
    "Energy Drink",
    "Sweetened Coffee",
    "Pastry",
    "Cake",
    "Jam",
    "Ketchup",
];

/// Seeded users and how many scans each starts with.
const SEED_COUNTS: [(&str, usize); 4] = [("1", 80), ("2", 40), ("3", 60), ("4", 30)];

const HISTORY_DAYS: u64 = 60;
const VALID_PROBABILITY: f64 = 0.8;

/// Whether a scan passed label validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Valid,
    Invalid,
}

impl ValidationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }
}

/// One logged food scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SugarRecord {
    pub id: String,
    pub user_id: String,
    pub scan_id: String,
    pub food_name: String,
    /// Grams of sugar in a single package.
    pub sugar_per_package: f64,
    pub package_count: u32,
    /// `sugar_per_package * package_count`, rounded to 0.1 g.
    pub total_sugar: f64,
    /// `total_sugar / 4`.
    pub teaspoons: f64,
    pub scan_time: DateTime<Utc>,
    pub validation_status: ValidationStatus,
}

impl SugarRecord {
    /// Teaspoon equivalent with one decimal, as shown in the table.
    pub fn teaspoon_label(&self) -> String {
        format!("{:.1}", self.teaspoons)
    }
}

/// User-editable record fields after form validation.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordDraft {
    pub food_name: String,
    pub sugar_per_package: f64,
    pub package_count: u32,
}

impl RecordDraft {
    pub fn total_sugar(&self) -> f64 {
        total_sugar(self.sugar_per_package, self.package_count)
    }

    pub fn teaspoons(&self) -> f64 {
        teaspoons(self.total_sugar())
    }
}

/// Total grams for `package_count` packages.
pub fn total_sugar(sugar_per_package: f64, package_count: u32) -> f64 {
    round_to(sugar_per_package * f64::from(package_count), 1)
}

/// Teaspoon equivalent of `grams`.
pub fn teaspoons(grams: f64) -> f64 {
    grams / GRAMS_PER_TEASPOON
}

/// A user whose history can be browsed on the sugar-history page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordOwner {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
}

impl RecordOwner {
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.email)
    }
}

/// Users with seeded histories, in selector order.
pub const RECORD_OWNERS: [RecordOwner; 4] = [
    RecordOwner { id: "1", name: "Admin User", email: "admin@scansek.com" },
    RecordOwner { id: "2", name: "Test User", email: "user@example.com" },
    RecordOwner { id: "3", name: "John Doe", email: "john@example.com" },
    RecordOwner { id: "4", name: "Jane Smith", email: "jane@example.com" },
];

/// Build `count` random records for `user_id`, scanned within the last
/// sixty days before `today`.
pub fn generate_records(rng: &mut impl Rng, user_id: &str, count: usize, today: NaiveDate) -> Vec<SugarRecord> {
    (0..count)
        .map(|i| {
            let sugar_per_package = round_to(rng.random_range(2.0..32.0), 1);
            let package_count = rng.random_range(1..=3);
            let total = total_sugar(sugar_per_package, package_count);
            let days_back = rng.random_range(0..HISTORY_DAYS);
            let scan_date = today.checked_sub_days(Days::new(days_back)).unwrap_or(today);
            SugarRecord {
                id: format!("rec_{}", i + 1),
                user_id: user_id.to_owned(),
                scan_id: format!("SCAN_{:X}", 1000 + i),
                food_name: FOOD_ITEMS[rng.random_range(0..FOOD_ITEMS.len())].to_owned(),
                sugar_per_package,
                package_count,
                total_sugar: total,
                teaspoons: teaspoons(total),
                scan_time: scan_date.and_time(chrono::NaiveTime::MIN).and_utc(),
                validation_status: if rng.random_bool(VALID_PROBABILITY) {
                    ValidationStatus::Valid
                } else {
                    ValidationStatus::Invalid
                },
            }
        })
        .collect()
}

/// In-memory record tables keyed by user id.
#[derive(Debug, Default)]
pub struct SugarDb {
    by_user: Option<HashMap<String, Vec<SugarRecord>>>,
}

impl SugarDb {
    /// A store populated with the standard seed set.
    pub fn seeded(rng: &mut impl Rng, today: NaiveDate) -> Self {
        let by_user = SEED_COUNTS
            .iter()
            .map(|&(user_id, count)| (user_id.to_owned(), generate_records(rng, user_id, count, today)))
            .collect();
        Self { by_user: Some(by_user) }
    }

    /// A store holding exactly `by_user`.
    pub fn from_records(by_user: HashMap<String, Vec<SugarRecord>>) -> Self {
        Self { by_user: Some(by_user) }
    }

    fn tables(&mut self) -> &mut HashMap<String, Vec<SugarRecord>> {
        self.by_user.get_or_insert_with(|| {
            let seeded = Self::seeded(&mut clock_rng(), Utc::now().date_naive());
            log::debug!("sugar store seeded");
            seeded.by_user.unwrap_or_default()
        })
    }

    /// Records for `user_id`, newest insertions first; empty for unknown users.
    pub fn history(&mut self, user_id: &str) -> Vec<SugarRecord> {
        self.tables().get(user_id).cloned().unwrap_or_default()
    }

    /// Prepend a new valid record built from `draft`.
    pub fn insert(&mut self, user_id: &str, draft: &RecordDraft, rng: &mut impl Rng, now: DateTime<Utc>) -> SugarRecord {
        let total = draft.total_sugar();
        let record = SugarRecord {
            id: format!("rec_{}", now.timestamp_millis()),
            user_id: user_id.to_owned(),
            scan_id: format!("SCAN_{:X}", rng.random_range(0..10_000u32)),
            food_name: draft.food_name.clone(),
            sugar_per_package: draft.sugar_per_package,
            package_count: draft.package_count,
            total_sugar: total,
            teaspoons: teaspoons(total),
            scan_time: now,
            validation_status: ValidationStatus::Valid,
        };
        self.tables().entry(user_id.to_owned()).or_default().insert(0, record.clone());
        record
    }

    /// Overwrite the editable fields of `record_id` and recompute derived ones.
    ///
    /// # Errors
    ///
    /// [`ServiceError::UserNotFound`] when the user has no table,
    /// [`ServiceError::RecordNotFound`] when the id is not in it.
    pub fn update(&mut self, user_id: &str, record_id: &str, draft: &RecordDraft) -> Result<SugarRecord, ServiceError> {
        let records = self.tables().get_mut(user_id).ok_or(ServiceError::UserNotFound)?;
        let record = records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or(ServiceError::RecordNotFound)?;
        record.food_name.clone_from(&draft.food_name);
        record.sugar_per_package = draft.sugar_per_package;
        record.package_count = draft.package_count;
        record.total_sugar = draft.total_sugar();
        record.teaspoons = draft.teaspoons();
        Ok(record.clone())
    }

    /// Remove `record_id` from every user's table. Returns how many rows went.
    pub fn remove(&mut self, record_id: &str) -> usize {
        self.tables()
            .values_mut()
            .map(|records| {
                let before = records.len();
                records.retain(|r| r.id != record_id);
                before - records.len()
            })
            .sum()
    }
}

/// Clonable async handle over a shared [`SugarDb`].
#[derive(Clone, Debug, Default)]
pub struct SugarService {
    db: Arc<Mutex<SugarDb>>,
}

impl SugarService {
    pub fn new(db: SugarDb) -> Self {
        Self { db: Arc::new(Mutex::new(db)) }
    }

    fn lock(&self) -> MutexGuard<'_, SugarDb> {
        self.db.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch the history for `user_id`.
    pub async fn fetch_history(&self, user_id: &str) -> Vec<SugarRecord> {
        latency::simulate(latency::FETCH_MS).await;
        let records = self.lock().history(user_id);
        log::debug!("fetched {} sugar records for user {user_id}", records.len());
        records
    }

    /// Create a record for `user_id`.
    pub async fn add_record(&self, user_id: &str, draft: RecordDraft) -> SugarRecord {
        latency::simulate(latency::MUTATE_MS).await;
        let record = self.lock().insert(user_id, &draft, &mut clock_rng(), Utc::now());
        log::info!("added sugar record {} for user {user_id}", record.id);
        record
    }

    /// Edit a record belonging to `user_id`.
    ///
    /// # Errors
    ///
    /// See [`SugarDb::update`].
    pub async fn update_record(
        &self,
        user_id: &str,
        record_id: &str,
        draft: RecordDraft,
    ) -> Result<SugarRecord, ServiceError> {
        latency::simulate(latency::MUTATE_MS).await;
        let result = self.lock().update(user_id, record_id, &draft);
        if let Err(e) = &result {
            log::warn!("update of {record_id} for user {user_id} failed: {e}");
        }
        result
    }

    /// Delete a record wherever it lives. Unknown ids are a no-op.
    pub async fn delete_record(&self, record_id: &str) {
        latency::simulate(latency::MUTATE_MS).await;
        let removed = self.lock().remove(record_id);
        log::info!("deleted {removed} sugar record(s) with id {record_id}");
    }
}
