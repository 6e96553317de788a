use super::*;
use chrono::Utc;

fn record(id: &str, food: &str) -> SugarRecord {
    SugarRecord {
        id: id.to_owned(),
        user_id: "1".to_owned(),
        scan_id: format!("SCAN_{id}"),
        food_name: food.to_owned(),
        sugar_per_package: 10.0,
        package_count: 1,
        total_sugar: 10.0,
        teaspoons: 2.5,
        scan_time: Utc::now(),
        validation_status: ValidationStatus::Valid,
    }
}

#[test]
fn replace_record_swaps_matching_id_in_place() {
    let mut records = vec![record("a", "Soda"), record("b", "Cake")];
    assert!(replace_record(&mut records, record("b", "Cheesecake")));
    assert_eq!(records[1].food_name, "Cheesecake");
    assert_eq!(records[0].food_name, "Soda");
}

#[test]
fn replace_record_ignores_unknown_id() {
    let mut records = vec![record("a", "Soda")];
    assert!(!replace_record(&mut records, record("z", "Jam")));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].food_name, "Soda");
}

#[test]
fn modal_defaults_to_closed() {
    assert_eq!(Modal::default(), Modal::Closed);
}
