//! Sugar-history table pipeline: filter, then sort.
//!
//! Page arithmetic lives in [`super::pagination`]; this module decides which
//! records are visible, in what order, and when the table returns to page 1.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::services::sugar::SugarRecord;
use crate::util::pagination::{PAGE_SIZES, Pagination};

/// Sortable table columns, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    ScanId,
    FoodName,
    SugarPerPackage,
    PackageCount,
    TotalSugar,
    Teaspoons,
    ScanTime,
    Status,
}

impl SortKey {
    pub const ALL: [Self; 8] = [
        Self::ScanId,
        Self::FoodName,
        Self::SugarPerPackage,
        Self::PackageCount,
        Self::TotalSugar,
        Self::Teaspoons,
        Self::ScanTime,
        Self::Status,
    ];

    /// Column header text.
    pub fn label(self) -> &'static str {
        match self {
            Self::ScanId => "Scan ID",
            Self::FoodName => "Food Name",
            Self::SugarPerPackage => "Sugar per Package (g)",
            Self::PackageCount => "Package Count",
            Self::TotalSugar => "Total Sugar (g)",
            Self::Teaspoons => "Teaspoons",
            Self::ScanTime => "Scan Time",
            Self::Status => "Status",
        }
    }

    fn compare(self, a: &SugarRecord, b: &SugarRecord) -> Ordering {
        match self {
            Self::ScanId => a.scan_id.cmp(&b.scan_id),
            Self::FoodName => a.food_name.cmp(&b.food_name),
            Self::SugarPerPackage => a.sugar_per_package.total_cmp(&b.sugar_per_package),
            Self::PackageCount => a.package_count.cmp(&b.package_count),
            Self::TotalSugar => a.total_sugar.total_cmp(&b.total_sugar),
            Self::Teaspoons => a.teaspoons.total_cmp(&b.teaspoons),
            Self::ScanTime => a.scan_time.cmp(&b.scan_time),
            Self::Status => a.validation_status.label().cmp(b.validation_status.label()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Active column and direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self { key: SortKey::ScanTime, direction: SortDirection::Desc }
    }
}

impl SortConfig {
    /// Next config after a click on `key`'s header.
    ///
    /// Only an ascending sort on the same column flips to descending; every
    /// other click starts ascending.
    #[must_use]
    pub fn request(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { key, direction }
    }

    /// Whether the header arrow for `key` in `direction` should be highlighted.
    pub fn is_active(self, key: SortKey, direction: SortDirection) -> bool {
        self.key == key && self.direction == direction
    }

    pub fn compare(self, a: &SugarRecord, b: &SugarRecord) -> Ordering {
        let ordering = self.key.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Which filter a chip clears.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Search,
    From,
    To,
}

/// Search term and inclusive date window for the records table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub search: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl RecordFilter {
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.from.is_some() || self.to.is_some()
    }

    /// Case-insensitive match on food name or scan id, then the date window.
    pub fn matches(&self, record: &SugarRecord) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = record.food_name.to_lowercase().contains(&needle)
                || record.scan_id.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(from) = self.from
            && record.scan_time < start_of_day(from)
        {
            return false;
        }
        if let Some(to) = self.to
            && record.scan_time > end_of_day(to)
        {
            return false;
        }
        true
    }

    /// Chip text for each active filter, in display order.
    pub fn chips(&self) -> Vec<(FilterField, String)> {
        let mut chips = Vec::new();
        if !self.search.is_empty() {
            chips.push((FilterField::Search, format!("Search: {}", self.search)));
        }
        if let Some(from) = self.from {
            chips.push((FilterField::From, format!("From: {}", from.format("%Y-%m-%d"))));
        }
        if let Some(to) = self.to {
            chips.push((FilterField::To, format!("To: {}", to.format("%Y-%m-%d"))));
        }
        chips
    }

    #[must_use]
    pub fn cleared(mut self, field: FilterField) -> Self {
        match field {
            FilterField::Search => self.search.clear(),
            FilterField::From => self.from = None,
            FilterField::To => self.to = None,
        }
        self
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    let last_second = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
    date.and_time(last_second).and_utc()
}

/// Records passing `filter`, ordered by `sort`. The sort is stable.
pub fn filter_and_sort(records: &[SugarRecord], filter: &RecordFilter, sort: SortConfig) -> Vec<SugarRecord> {
    let mut visible: Vec<SugarRecord> = records.iter().filter(|r| filter.matches(r)).cloned().collect();
    visible.sort_by(|a, b| sort.compare(a, b));
    visible
}

/// Filter, sort and paging choices of the records table.
///
/// Every edit that changes which rows are visible, or their order, puts the
/// table back on page 1. Only paging itself moves away from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    pub filter: RecordFilter,
    pub sort: SortConfig,
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self { filter: RecordFilter::default(), sort: SortConfig::default(), page: 1, page_size: PAGE_SIZES[0] }
    }
}

impl TableState {
    pub fn edit_filter(&mut self, edit: impl FnOnce(&mut RecordFilter)) {
        edit(&mut self.filter);
        self.page = 1;
    }

    pub fn request_sort(&mut self, key: SortKey) {
        self.sort = self.sort.request(key);
        self.page = 1;
    }

    /// The underlying record list was reloaded or mutated.
    pub fn records_changed(&mut self) {
        self.page = 1;
    }

    /// Take the page and size chosen in the pagination bar.
    pub fn set_pagination(&mut self, next: Pagination) {
        self.page = if next.page_size == self.page_size { next.page } else { 1 };
        self.page_size = next.page_size;
    }

    /// Paging over `total` visible rows, clamped to the last page.
    pub fn pagination(&self, total: usize) -> Pagination {
        Pagination::new(self.page_size, total).with_page(self.page)
    }
}
