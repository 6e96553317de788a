use super::*;
use crate::services::sugar::ValidationStatus;
use chrono::TimeZone;

fn record(id: &str, scan_id: &str, food: &str, total: f64, scanned: DateTime<Utc>) -> SugarRecord {
    SugarRecord {
        id: id.to_owned(),
        user_id: "1".to_owned(),
        scan_id: scan_id.to_owned(),
        food_name: food.to_owned(),
        sugar_per_package: total,
        package_count: 1,
        total_sugar: total,
        teaspoons: total / 4.0,
        scan_time: scanned,
        validation_status: ValidationStatus::Valid,
    }
}

fn at(d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, d, h, 0, 0).unwrap()
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

fn sample() -> Vec<SugarRecord> {
    vec![
        record("a", "SCAN_3E8", "Soda", 40.0, at(1, 9)),
        record("b", "SCAN_3E9", "Cereal", 9.5, at(3, 0)),
        record("c", "SCAN_3EA", "Chocolate Bar", 24.0, at(5, 23)),
        record("d", "SCAN_AB12", "Energy Drink", 110.0, at(2, 12)),
    ]
}

fn ids(records: &[SugarRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn default_sort_is_newest_first() {
    let sorted = filter_and_sort(&sample(), &RecordFilter::default(), SortConfig::default());
    assert_eq!(ids(&sorted), ["c", "b", "d", "a"]);
}

#[test]
fn request_same_ascending_column_flips_to_descending() {
    let asc = SortConfig { key: SortKey::FoodName, direction: SortDirection::Asc };
    assert_eq!(asc.request(SortKey::FoodName).direction, SortDirection::Desc);
}

#[test]
fn request_descending_or_other_column_starts_ascending() {
    let config = SortConfig::default();
    assert_eq!(config.request(SortKey::ScanTime), SortConfig { key: SortKey::ScanTime, direction: SortDirection::Asc });
    assert_eq!(config.request(SortKey::TotalSugar).direction, SortDirection::Asc);
}

#[test]
fn numeric_columns_sort_numerically() {
    let config = SortConfig { key: SortKey::Teaspoons, direction: SortDirection::Asc };
    let sorted = filter_and_sort(&sample(), &RecordFilter::default(), config);
    // 110 / 4 = 27.5 would sort before 6.0 as a string.
    assert_eq!(ids(&sorted), ["b", "c", "a", "d"]);
}

#[test]
fn string_columns_sort_lexicographically() {
    let config = SortConfig { key: SortKey::FoodName, direction: SortDirection::Desc };
    let sorted = filter_and_sort(&sample(), &RecordFilter::default(), config);
    assert_eq!(ids(&sorted), ["a", "d", "c", "b"]);
}

#[test]
fn status_sorts_invalid_before_valid() {
    let mut records = sample();
    records[2].validation_status = ValidationStatus::Invalid;
    let config = SortConfig { key: SortKey::Status, direction: SortDirection::Asc };
    let sorted = filter_and_sort(&records, &RecordFilter::default(), config);
    assert_eq!(sorted[0].id, "c");
}

#[test]
fn is_active_tracks_key_and_direction() {
    let config = SortConfig::default();
    assert!(config.is_active(SortKey::ScanTime, SortDirection::Desc));
    assert!(!config.is_active(SortKey::ScanTime, SortDirection::Asc));
    assert!(!config.is_active(SortKey::ScanId, SortDirection::Desc));
}

#[test]
fn column_labels_in_order() {
    let labels: Vec<_> = SortKey::ALL.iter().map(|k| k.label()).collect();
    assert_eq!(labels[0], "Scan ID");
    assert_eq!(labels[5], "Teaspoons");
    assert_eq!(labels[7], "Status");
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn search_matches_food_name_case_insensitively() {
    let filter = RecordFilter { search: "SODA".to_owned(), ..RecordFilter::default() };
    assert_eq!(ids(&filter_and_sort(&sample(), &filter, SortConfig::default())), ["a"]);
}

#[test]
fn search_matches_scan_id() {
    let filter = RecordFilter { search: "ab1".to_owned(), ..RecordFilter::default() };
    assert_eq!(ids(&filter_and_sort(&sample(), &filter, SortConfig::default())), ["d"]);
}

#[test]
fn date_bounds_are_inclusive_whole_days() {
    let filter = RecordFilter { search: String::new(), from: Some(date(3)), to: Some(date(5)) };
    let visible = filter_and_sort(&sample(), &filter, SortConfig::default());
    // 3 Mar 00:00 and 5 Mar 23:00 are both inside.
    assert_eq!(ids(&visible), ["c", "b"]);
}

#[test]
fn from_only_and_to_only() {
    let from = RecordFilter { from: Some(date(2)), ..RecordFilter::default() };
    assert_eq!(filter_and_sort(&sample(), &from, SortConfig::default()).len(), 3);
    let to = RecordFilter { to: Some(date(1)), ..RecordFilter::default() };
    assert_eq!(ids(&filter_and_sort(&sample(), &to, SortConfig::default())), ["a"]);
}

#[test]
fn no_match_yields_empty() {
    let filter = RecordFilter { search: "kale".to_owned(), ..RecordFilter::default() };
    assert!(filter_and_sort(&sample(), &filter, SortConfig::default()).is_empty());
}

// =============================================================
// Chips
// =============================================================

#[test]
fn chips_list_active_filters() {
    let filter = RecordFilter { search: "soda".to_owned(), from: None, to: Some(date(9)) };
    assert!(filter.is_active());
    assert_eq!(
        filter.chips(),
        vec![(FilterField::Search, "Search: soda".to_owned()), (FilterField::To, "To: 2025-03-09".to_owned())]
    );
}

#[test]
fn clearing_chips_deactivates_filter() {
    let filter = RecordFilter { search: "soda".to_owned(), from: Some(date(1)), to: None };
    let filter = filter.cleared(FilterField::Search).cleared(FilterField::From);
    assert!(!filter.is_active());
    assert!(filter.chips().is_empty());
}

// =============================================================
// TableState
// =============================================================

fn on_page_three() -> TableState {
    let mut table = TableState::default();
    table.set_pagination(Pagination { page: 3, page_size: PAGE_SIZES[0], total: 80 });
    assert_eq!(table.page, 3);
    table
}

#[test]
fn filter_edits_return_to_first_page() {
    let mut table = on_page_three();
    table.edit_filter(|f| f.search = "soda".to_owned());
    assert_eq!(table.page, 1);
    assert_eq!(table.filter.search, "soda");

    let mut table = on_page_three();
    table.edit_filter(|f| *f = std::mem::take(f).cleared(FilterField::From));
    assert_eq!(table.page, 1);
}

#[test]
fn sort_requests_return_to_first_page() {
    let mut table = on_page_three();
    table.request_sort(SortKey::FoodName);
    assert_eq!(table.page, 1);
    assert_eq!(table.sort, SortConfig { key: SortKey::FoodName, direction: SortDirection::Asc });
}

#[test]
fn record_changes_return_to_first_page() {
    let mut table = on_page_three();
    table.records_changed();
    assert_eq!(table.page, 1);
}

#[test]
fn page_size_change_returns_to_first_page() {
    let mut table = on_page_three();
    table.set_pagination(Pagination { page: 3, page_size: 25, total: 80 });
    assert_eq!((table.page, table.page_size), (1, 25));
}

#[test]
fn pagination_clamps_to_last_page() {
    let table = on_page_three();
    assert_eq!(table.pagination(80).page, 3);
    assert_eq!(table.pagination(15).page, 2);
    assert_eq!(table.pagination(0).page, 1);
}
