use super::*;
use crate::services::statistics::build_snapshot;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================
// DateRange
// =============================================================

#[test]
fn default_range_covers_last_thirty_days() {
    let range = DateRange::ending(date(2025, 3, 15));
    assert_eq!(range.from, date(2025, 2, 13));
    assert_eq!(range.to, date(2025, 3, 15));
}

#[test]
fn with_from_ignores_blank_input() {
    let range = DateRange::ending(date(2025, 3, 15));
    assert_eq!(range.with_from(""), range);
    assert_eq!(range.with_from("2025-03-01").from, date(2025, 3, 1));
}

#[test]
fn with_to_never_passes_today() {
    let today = date(2025, 3, 15);
    let range = DateRange::ending(today);
    assert_eq!(range.with_to("2025-04-01", today).to, today);
    assert_eq!(range.with_to("2025-03-10", today).to, date(2025, 3, 10));
    assert_eq!(range.with_to("garbage", today), range);
}

#[test]
fn with_from_after_end_date_collapses_to_end() {
    let range = DateRange::ending(date(2025, 3, 15));
    let edited = range.with_from("2025-03-20");
    assert_eq!(edited.from, date(2025, 3, 15));
    assert!(edited.from <= edited.to);
}

#[test]
fn with_to_before_start_date_collapses_to_start() {
    let today = date(2025, 3, 15);
    let range = DateRange::ending(today);
    let edited = range.with_to("2025-01-01", today);
    assert_eq!(edited.to, range.from);
    assert!(edited.from <= edited.to);
}

#[test]
fn edited_range_always_builds_a_report() {
    let today = date(2025, 3, 15);
    let range = DateRange::ending(today).with_from("2025-03-20").with_to("2025-03-01", today);
    let mut rng = StdRng::seed_from_u64(3);
    let snapshot = build_snapshot(&mut rng, range.from, range.to).unwrap();
    assert_eq!(snapshot.daily_consumption.len(), 1);
}

// =============================================================
// daily_series
// =============================================================

#[test]
fn daily_series_pairs_intake_with_reference_line() {
    let mut rng = StdRng::seed_from_u64(7);
    let snapshot = build_snapshot(&mut rng, date(2025, 3, 1), date(2025, 3, 5)).unwrap();
    let (labels, series) = daily_series(&snapshot);

    assert_eq!(labels, ["Mar 1", "Mar 2", "Mar 3", "Mar 4", "Mar 5"]);
    assert_eq!(series.len(), 2);
    assert!(series[0].filled);
    assert_eq!(series[0].values.len(), 5);
    assert_eq!(series[1].name, "Recommended Max (25g)");
    assert!(series[1].dashed);
    assert_eq!(series[1].values, vec![25.0; 5]);
}
