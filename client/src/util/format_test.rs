use super::*;

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap().and_utc()
}

#[test]
fn round_to_one_decimal() {
    assert_eq!(round_to(36.900_000_000_000_006, 1), 36.9);
    assert_eq!(round_to(12.25, 1), 12.3);
    assert_eq!(round_to(0.04, 1), 0.0);
}

#[test]
fn round_to_zero_decimals() {
    assert_eq!(round_to(1052.6, 0), 1053.0);
}

#[test]
fn format_amount_drops_trailing_zero() {
    assert_eq!(format_amount(42.0), "42");
    assert_eq!(format_amount(36.9), "36.9");
    assert_eq!(format_amount(10.04), "10");
}

#[test]
fn format_grams_appends_unit() {
    assert_eq!(format_grams(285.0), "285g");
    assert_eq!(format_grams(35.25), "35.3g");
}

#[test]
fn scan_time_uses_twelve_hour_clock() {
    assert_eq!(format_scan_time(&utc(2025, 3, 5, 8, 10)), "Mar 5, 2025 8:10 AM");
    assert_eq!(format_scan_time(&utc(2025, 12, 25, 16, 45)), "Dec 25, 2025 4:45 PM");
}

#[test]
fn long_date_spells_month() {
    assert_eq!(format_long_date(&utc(2025, 1, 15, 14, 20)), "January 15, 2025");
}

#[test]
fn medium_and_axis_dates() {
    let date = NaiveDate::from_ymd_opt(2025, 2, 9).unwrap();
    assert_eq!(format_medium_date(date), "Feb 9, 2025");
    assert_eq!(format_axis_date(date), "Feb 9");
}

#[test]
fn date_input_round_trips() {
    let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
    assert_eq!(date_input_value(date), "2025-07-04");
    assert_eq!(parse_date_input("2025-07-04"), Some(date));
}

#[test]
fn parse_date_input_rejects_blank_and_garbage() {
    assert_eq!(parse_date_input(""), None);
    assert_eq!(parse_date_input("   "), None);
    assert_eq!(parse_date_input("07/04/2025"), None);
}

#[test]
fn avatar_initial_uppercases_first_char() {
    assert_eq!(avatar_initial("admin"), "A");
    assert_eq!(avatar_initial(""), "");
}
