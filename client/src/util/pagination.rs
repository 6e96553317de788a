//! Page arithmetic for the records and users tables.
//!
//! Pages are 1-based. An empty table still has one (empty) page so the
//! current page never drops to zero.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Page sizes offered on the sugar-history table.
pub const PAGE_SIZES: [usize; 3] = [10, 25, 50];

/// Most page buttons shown at once.
pub const MAX_PAGE_BUTTONS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, page_size: PAGE_SIZES[0], total: 0 }
    }
}

impl Pagination {
    pub fn new(page_size: usize, total: usize) -> Self {
        Self { page: 1, page_size: page_size.max(1), total }
    }

    /// `ceil(total / page_size)`, at least 1.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size.max(1)).max(1)
    }

    #[must_use]
    pub fn with_page(self, page: usize) -> Self {
        Self { page: page.clamp(1, self.page_count()), ..self }
    }

    /// New row count; the current page is kept if it still exists.
    #[must_use]
    pub fn with_total(self, total: usize) -> Self {
        Self { total, ..self }.with_page(self.page)
    }

    /// New page size; always back to page 1.
    #[must_use]
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self { page: 1, page_size: page_size.max(1), ..self }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        self.with_page(self.page.saturating_sub(1))
    }

    #[must_use]
    pub fn next(self) -> Self {
        self.with_page(self.page + 1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Index range of the current page within the full list.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    /// The current page's rows out of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        items.get(range).unwrap_or(&[])
    }

    /// 1-based index of the first visible row.
    pub fn first_shown(&self) -> usize {
        if self.total == 0 { 0 } else { self.range().start + 1 }
    }

    pub fn last_shown(&self) -> usize {
        self.range().end
    }

    /// "Showing {first} to {last} of {total} results".
    pub fn summary(&self) -> String {
        format!("Showing {} to {} of {} results", self.first_shown(), self.last_shown(), self.total)
    }

    /// Page numbers for the button strip.
    ///
    /// Near the start the window is pinned to 1..=5, near the end to the last
    /// five pages, otherwise it is centered on the current page.
    pub fn page_buttons(&self) -> Vec<usize> {
        let count = self.page_count();
        let shown = count.min(MAX_PAGE_BUTTONS);
        let first = if count <= MAX_PAGE_BUTTONS || self.page <= 3 {
            1
        } else if self.page >= count - 2 {
            count - (MAX_PAGE_BUTTONS - 1)
        } else {
            self.page - 2
        };
        (first..first + shown).collect()
    }
}
