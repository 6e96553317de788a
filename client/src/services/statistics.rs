//! Mock statistics report.
//!
//! Every fetch draws fresh daily samples for the requested window, so the
//! numbers are unrelated to the sugar-history records and change between
//! calls.

#[cfg(test)]
#[path = "statistics_test.rs"]
mod statistics_test;

use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::latency;
use super::{ServiceError, clock_rng};
use crate::util::format::round_to;

/// Longest window a single report covers; older days are dropped.
pub const MAX_RANGE_DAYS: u64 = 366;

/// Default lookback for the statistics page.
pub const DEFAULT_RANGE_DAYS: u64 = 30;

/// Recommended daily sugar ceiling in grams.
pub const RECOMMENDED_MAX_GRAMS: f64 = 25.0;

const WEEKLY_TOTALS: [(&str, f64); 4] = [("Week 1", 210.0), ("Week 2", 180.0), ("Week 3", 240.0), ("Week 4", 200.0)];
const TREND_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Share of sugar intake by source, in percent.
pub const SUGAR_SOURCES: [(&str, f64); 4] =
    [("Processed Foods", 45.0), ("Beverages", 30.0), ("Desserts", 15.0), ("Others", 10.0)];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySample {
    pub date: NaiveDate,
    pub sugar_amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTotal {
    pub week: String,
    pub sugar_amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendPoint {
    pub month: String,
    pub average_daily_consumption: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceShare {
    pub source: String,
    pub percentage: f64,
}

/// Aggregated report rendered by the statistics page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    pub daily_average: f64,
    pub total_consumption: f64,
    pub max_daily_consumption: f64,
    pub max_consumption_date: NaiveDate,
    pub daily_consumption: Vec<DailySample>,
    pub weekly_consumption: Vec<WeeklyTotal>,
    pub monthly_trend: Vec<MonthlyTrendPoint>,
    pub sugar_sources: Vec<SourceShare>,
}

/// Whose consumption the report should cover.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UserFilter {
    #[default]
    All,
    User(String),
}

impl UserFilter {
    const ALL_VALUE: &'static str = "all";

    /// Parse a `<select>` value.
    pub fn from_select_value(value: &str) -> Self {
        if value == Self::ALL_VALUE || value.is_empty() {
            Self::All
        } else {
            Self::User(value.to_owned())
        }
    }

    pub fn select_value(&self) -> String {
        match self {
            Self::All => Self::ALL_VALUE.to_owned(),
            Self::User(id) => id.clone(),
        }
    }
}

/// Source shares as report rows.
pub fn sugar_sources() -> Vec<SourceShare> {
    SUGAR_SOURCES
        .iter()
        .map(|&(source, percentage)| SourceShare { source: source.to_owned(), percentage })
        .collect()
}

/// One random sample per day in `[from, to]`, oldest first.
///
/// # Errors
///
/// [`ServiceError::InvalidDateRange`] when `from` is after `to`.
pub fn generate_daily(rng: &mut impl Rng, from: NaiveDate, to: NaiveDate) -> Result<Vec<DailySample>, ServiceError> {
    if from > to {
        return Err(ServiceError::InvalidDateRange { from, to });
    }
    let earliest = to.checked_sub_days(Days::new(MAX_RANGE_DAYS - 1)).unwrap_or(from);
    let start = from.max(earliest);
    Ok(start
        .iter_days()
        .take_while(|date| *date <= to)
        .map(|date| DailySample { date, sugar_amount: round_to(rng.random_range(10.0..60.0), 1) })
        .collect())
}

/// Build the full report from daily samples plus fixed and random side series.
///
/// Returns `None` for an empty sample set.
pub fn summarize(rng: &mut impl Rng, daily: Vec<DailySample>) -> Option<StatisticsSnapshot> {
    let first = daily.first()?;
    let max_day = daily
        .iter()
        .fold(first, |best, day| if day.sugar_amount > best.sugar_amount { day } else { best });
    let (max_daily_consumption, max_consumption_date) = (max_day.sugar_amount, max_day.date);
    let total: f64 = daily.iter().map(|d| d.sugar_amount).sum();
    #[allow(clippy::cast_precision_loss)]
    let daily_average = round_to(total / daily.len() as f64, 1);

    let weekly_consumption = WEEKLY_TOTALS
        .iter()
        .map(|&(week, sugar_amount)| WeeklyTotal { week: week.to_owned(), sugar_amount })
        .collect();
    let monthly_trend = TREND_MONTHS
        .iter()
        .map(|month| MonthlyTrendPoint {
            month: (*month).to_owned(),
            average_daily_consumption: round_to(rng.random_range(20.0..40.0), 1),
        })
        .collect();

    Some(StatisticsSnapshot {
        daily_average,
        total_consumption: total.round(),
        max_daily_consumption,
        max_consumption_date,
        daily_consumption: daily,
        weekly_consumption,
        monthly_trend,
        sugar_sources: sugar_sources(),
    })
}

/// Generate a report for `[from, to]`.
///
/// # Errors
///
/// [`ServiceError::InvalidDateRange`] when `from` is after `to`.
pub fn build_snapshot(rng: &mut impl Rng, from: NaiveDate, to: NaiveDate) -> Result<StatisticsSnapshot, ServiceError> {
    let daily = generate_daily(rng, from, to)?;
    // A valid range always yields at least one day.
    summarize(rng, daily).ok_or(ServiceError::InvalidDateRange { from, to })
}

/// Fetch a report after a simulated round trip.
///
/// The user filter is accepted for interface parity but does not shape the
/// generated numbers.
///
/// # Errors
///
/// [`ServiceError::InvalidDateRange`] when `from` is after `to`.
pub async fn fetch_statistics(
    filter: &UserFilter,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<StatisticsSnapshot, ServiceError> {
    latency::simulate(latency::REPORT_MS).await;
    let result = build_snapshot(&mut clock_rng(), from, to);
    match &result {
        Ok(snapshot) => log::debug!(
            "statistics for {} over {from}..={to}: {} days",
            filter.select_value(),
            snapshot.daily_consumption.len()
        ),
        Err(e) => log::warn!("statistics request rejected: {e}"),
    }
    result
}
