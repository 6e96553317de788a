use super::*;

// =============================================================
// canned_overview
// =============================================================

#[test]
fn overview_has_four_cards_in_order() {
    let titles: Vec<_> = canned_overview().stats.iter().map(|s| s.title).collect();
    assert_eq!(titles, ["Daily Average", "Weekly Total", "Monthly Average", "Total Scans"]);
}

#[test]
fn neutral_card_has_no_comparison() {
    let overview = canned_overview();
    let neutral: Vec<_> = overview.stats.iter().filter(|s| s.trend == Trend::Neutral).collect();
    assert_eq!(neutral.len(), 1);
    assert!(neutral[0].trend_value.is_empty());
}

#[test]
fn weekday_series_spans_a_week() {
    let overview = canned_overview();
    assert_eq!(overview.weekday_sugar.len(), 7);
    assert_eq!(overview.weekday_sugar[5], ChartPoint::new("Sat", 60.0));
}

// =============================================================
// Trend
// =============================================================

#[test]
fn trend_arrows() {
    assert_eq!(Trend::Up.arrow(), "↑");
    assert_eq!(Trend::Down.arrow(), "↓");
    assert!(Trend::Up.css_class().ends_with("--up"));
}
