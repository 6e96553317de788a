use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn draft(name: &str, per_package: f64, count: u32) -> RecordDraft {
    RecordDraft { food_name: name.to_owned(), sugar_per_package: per_package, package_count: count }
}

// =============================================================
// Derived fields
// =============================================================

#[test]
fn total_sugar_multiplies_and_rounds() {
    assert_eq!(total_sugar(12.3, 3), 36.9);
    assert_eq!(total_sugar(0.0, 2), 0.0);
}

#[test]
fn teaspoons_divides_by_four() {
    assert_eq!(teaspoons(36.0), 9.0);
    assert_eq!(teaspoons(10.0), 2.5);
}

#[test]
fn draft_derived_fields_match_free_functions() {
    let d = draft("Soda", 8.5, 2);
    assert_eq!(d.total_sugar(), 17.0);
    assert_eq!(d.teaspoons(), 4.25);
}

#[test]
fn teaspoon_label_has_one_decimal() {
    let mut db = SugarDb::from_records(HashMap::new());
    let record = db.insert("1", &draft("Soda", 8.6, 2), &mut rng(), Utc::now());
    assert_eq!(record.teaspoon_label(), "4.3");
}

// =============================================================
// Generation
// =============================================================

#[test]
fn generated_records_respect_ranges() {
    let records = generate_records(&mut rng(), "7", 200, today());
    assert_eq!(records.len(), 200);
    let earliest = today().checked_sub_days(Days::new(59)).unwrap();
    for r in &records {
        assert_eq!(r.user_id, "7");
        assert!((2.0..=32.0).contains(&r.sugar_per_package), "{}", r.sugar_per_package);
        assert!((1..=3).contains(&r.package_count));
        assert_eq!(r.total_sugar, total_sugar(r.sugar_per_package, r.package_count));
        assert_eq!(r.teaspoons, r.total_sugar / 4.0);
        let date = r.scan_time.date_naive();
        assert!(date <= today() && date >= earliest, "{date}");
        assert!(FOOD_ITEMS.contains(&r.food_name.as_str()));
    }
}

#[test]
fn generated_ids_are_sequential_with_hex_scan_ids() {
    let records = generate_records(&mut rng(), "1", 3, today());
    let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    let scans: Vec<_> = records.iter().map(|r| r.scan_id.as_str()).collect();
    assert_eq!(ids, ["rec_1", "rec_2", "rec_3"]);
    assert_eq!(scans, ["SCAN_3E8", "SCAN_3E9", "SCAN_3EA"]);
}

#[test]
fn generated_statuses_are_mostly_valid() {
    let records = generate_records(&mut rng(), "1", 500, today());
    let valid = records.iter().filter(|r| r.validation_status == ValidationStatus::Valid).count();
    assert!(valid > 300 && valid < 500, "valid count {valid}");
}

#[test]
fn seeded_store_has_standard_counts() {
    let mut db = SugarDb::seeded(&mut rng(), today());
    assert_eq!(db.history("1").len(), 80);
    assert_eq!(db.history("2").len(), 40);
    assert_eq!(db.history("3").len(), 60);
    assert_eq!(db.history("4").len(), 30);
}

#[test]
fn default_store_seeds_lazily() {
    let mut db = SugarDb::default();
    assert_eq!(db.history("1").len(), 80);
}

#[test]
fn unknown_user_has_empty_history() {
    let mut db = SugarDb::seeded(&mut rng(), today());
    assert!(db.history("99").is_empty());
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn insert_prepends_valid_record() {
    let mut db = SugarDb::seeded(&mut rng(), today());
    let now = Utc::now();
    let record = db.insert("2", &draft("Cake", 20.0, 2), &mut rng(), now);
    assert_eq!(record.id, format!("rec_{}", now.timestamp_millis()));
    assert!(record.scan_id.starts_with("SCAN_"));
    assert_eq!(record.total_sugar, 40.0);
    assert_eq!(record.teaspoons, 10.0);
    assert_eq!(record.validation_status, ValidationStatus::Valid);
    assert_eq!(record.scan_time, now);

    let history = db.history("2");
    assert_eq!(history.len(), 41);
    assert_eq!(history[0], record);
}

#[test]
fn insert_creates_table_for_new_user() {
    let mut db = SugarDb::seeded(&mut rng(), today());
    db.insert("9", &draft("Jam", 5.0, 1), &mut rng(), Utc::now());
    assert_eq!(db.history("9").len(), 1);
}

#[test]
fn update_rewrites_fields_and_derived_values() {
    let mut db = SugarDb::seeded(&mut rng(), today());
    let original = db.history("1")[5].clone();
    let updated = db.update("1", &original.id, &draft("Granola Bar", 7.5, 2)).unwrap();
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.scan_id, original.scan_id);
    assert_eq!(updated.scan_time, original.scan_time);
    assert_eq!(updated.food_name, "Granola Bar");
    assert_eq!(updated.total_sugar, 15.0);
    assert_eq!(updated.teaspoons, 3.75);
    assert_eq!(db.history("1")[5], updated);
}

#[test]
fn update_unknown_user_fails() {
    let mut db = SugarDb::seeded(&mut rng(), today());
    assert_eq!(db.update("42", "rec_1", &draft("Jam", 1.0, 1)), Err(ServiceError::UserNotFound));
}

#[test]
fn update_unknown_record_fails() {
    let mut db = SugarDb::seeded(&mut rng(), today());
    assert_eq!(db.update("1", "rec_missing", &draft("Jam", 1.0, 1)), Err(ServiceError::RecordNotFound));
}

#[test]
fn remove_sweeps_every_user() {
    let mut db = SugarDb::seeded(&mut rng(), today());
    // Seeded ids restart at rec_1 for each user.
    assert_eq!(db.remove("rec_1"), 4);
    assert_eq!(db.history("1").len(), 79);
    assert_eq!(db.history("4").len(), 29);
    assert!(db.history("3").iter().all(|r| r.id != "rec_1"));
}

#[test]
fn remove_unknown_id_is_noop() {
    let mut db = SugarDb::seeded(&mut rng(), today());
    assert_eq!(db.remove("rec_missing"), 0);
    assert_eq!(db.history("1").len(), 80);
}

// =============================================================
// Async handle
// =============================================================

#[test]
fn service_round_trip_through_shared_store() {
    let service = SugarService::new(SugarDb::seeded(&mut rng(), today()));
    let other_handle = service.clone();

    futures::executor::block_on(async {
        let created = service.add_record("3", draft("Candy", 3.0, 3)).await;
        let history = other_handle.fetch_history("3").await;
        assert_eq!(history[0].id, created.id);

        let edited = service.update_record("3", &created.id, draft("Candy", 4.0, 1)).await.unwrap();
        assert_eq!(edited.total_sugar, 4.0);

        service.delete_record(&created.id).await;
        assert_eq!(other_handle.fetch_history("3").await.len(), 60);
    });
}

#[test]
fn record_owner_option_label() {
    assert_eq!(RECORD_OWNERS[0].option_label(), "Admin User (admin@scansek.com)");
}
