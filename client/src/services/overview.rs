//! Canned numbers for the dashboard overview.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use super::latency;
use super::statistics::{SourceShare, sugar_sources};
use crate::util::chart::ChartPoint;

/// Direction marker on an overview card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Neutral => "→",
        }
    }

    /// More sugar is bad news, so rising trends render as warnings.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Up => "trend trend--up",
            Self::Down => "trend trend--down",
            Self::Neutral => "trend trend--neutral",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverviewStat {
    pub title: &'static str,
    pub value: String,
    pub description: &'static str,
    pub trend: Trend,
    /// Empty when no comparison is shown.
    pub trend_value: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverviewSnapshot {
    pub stats: Vec<OverviewStat>,
    pub weekday_sugar: Vec<ChartPoint>,
    pub weekly_sugar: Vec<ChartPoint>,
    pub sources: Vec<SourceShare>,
}

fn points(rows: &[(&str, f64)]) -> Vec<ChartPoint> {
    rows.iter().map(|&(label, value)| ChartPoint::new(label, value)).collect()
}

/// The fixed overview payload.
pub fn canned_overview() -> OverviewSnapshot {
    OverviewSnapshot {
        stats: vec![
            OverviewStat {
                title: "Daily Average",
                value: "42g".to_owned(),
                description: "of sugar consumption",
                trend: Trend::Up,
                trend_value: "12%",
            },
            OverviewStat {
                title: "Weekly Total",
                value: "285g".to_owned(),
                description: "of sugar consumption",
                trend: Trend::Down,
                trend_value: "5%",
            },
            OverviewStat {
                title: "Monthly Average",
                value: "38g".to_owned(),
                description: "per day",
                trend: Trend::Neutral,
                trend_value: "",
            },
            OverviewStat {
                title: "Total Scans",
                value: "124".to_owned(),
                description: "food items scanned",
                trend: Trend::Up,
                trend_value: "24%",
            },
        ],
        weekday_sugar: points(&[
            ("Mon", 32.0),
            ("Tue", 45.0),
            ("Wed", 38.0),
            ("Thu", 25.0),
            ("Fri", 42.0),
            ("Sat", 60.0),
            ("Sun", 35.0),
        ]),
        weekly_sugar: points(&[("Week 1", 180.0), ("Week 2", 200.0), ("Week 3", 190.0), ("Week 4", 210.0)]),
        sources: sugar_sources(),
    }
}

/// Fetch the overview after a simulated round trip.
pub async fn fetch_overview() -> OverviewSnapshot {
    latency::simulate(latency::REPORT_MS).await;
    canned_overview()
}
