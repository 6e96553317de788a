use super::*;

fn at(page: usize, page_size: usize, total: usize) -> Pagination {
    Pagination::new(page_size, total).with_page(page)
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(at(1, 10, 80).page_count(), 8);
    assert_eq!(at(1, 25, 80).page_count(), 4);
    assert_eq!(at(1, 50, 80).page_count(), 2);
    assert_eq!(at(1, 10, 81).page_count(), 9);
}

#[test]
fn empty_table_has_one_page() {
    let p = Pagination::new(10, 0);
    assert_eq!(p.page_count(), 1);
    assert_eq!(p.first_shown(), 0);
    assert_eq!(p.last_shown(), 0);
    assert!(!p.has_previous());
    assert!(!p.has_next());
}

#[test]
fn previous_and_next_clamp() {
    let first = at(1, 10, 30);
    assert_eq!(first.previous().page, 1);
    let last = at(3, 10, 30);
    assert_eq!(last.next().page, 3);
    assert_eq!(first.next().next().page, 3);
    assert_eq!(at(99, 10, 30).page, 3);
    assert_eq!(at(0, 10, 30).page, 1);
}

#[test]
fn slice_returns_page_rows() {
    let rows: Vec<u32> = (1..=23).collect();
    assert_eq!(at(1, 10, 23).slice(&rows), &rows[0..10]);
    assert_eq!(at(3, 10, 23).slice(&rows), &[21, 22, 23]);
}

#[test]
fn summary_text() {
    assert_eq!(at(2, 10, 23).summary(), "Showing 11 to 20 of 23 results");
    assert_eq!(at(3, 10, 23).summary(), "Showing 21 to 23 of 23 results");
}

#[test]
fn page_size_change_resets_to_first_page() {
    let p = at(4, 10, 80).with_page_size(25);
    assert_eq!(p.page, 1);
    assert_eq!(p.page_count(), 4);
}

#[test]
fn shrinking_total_clamps_page() {
    let p = at(8, 10, 80).with_total(15);
    assert_eq!(p.page, 2);
    assert_eq!(at(2, 10, 80).with_total(60).page, 2);
}

// =============================================================
// Page button window
// =============================================================

#[test]
fn few_pages_show_all_buttons() {
    assert_eq!(at(2, 10, 30).page_buttons(), [1, 2, 3]);
}

#[test]
fn window_pinned_at_start() {
    assert_eq!(at(3, 10, 100).page_buttons(), [1, 2, 3, 4, 5]);
}

#[test]
fn window_pinned_at_end() {
    assert_eq!(at(9, 10, 100).page_buttons(), [6, 7, 8, 9, 10]);
    assert_eq!(at(8, 10, 100).page_buttons(), [6, 7, 8, 9, 10]);
}

#[test]
fn window_centered_in_middle() {
    assert_eq!(at(5, 10, 100).page_buttons(), [3, 4, 5, 6, 7]);
}

#[test]
fn page_sizes_offered() {
    assert_eq!(PAGE_SIZES, [10, 25, 50]);
    assert_eq!(Pagination::default().page_size, 10);
}
