//! Page arithmetic for the pager.

use std::collections::BTreeSet;

/// Last 0-based page of a result set, 0 when the total is unknown or empty.
pub fn last_page(total_items: Option<u64>, page_size: Option<u64>) -> u64 {
    match (total_items, page_size) {
        (Some(total_items), Some(page_size)) if page_size > 0 => {
            total_items.div_ceil(page_size).saturating_sub(1)
        }
        _ => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerItem {
    Page(u64),
    /// Skipped pages between the window and the first or last page.
    Gap,
}

/// Page links to show: the first page, `window_size` pages around the current
/// one, and the last page, with gaps where pages are skipped.
pub fn page_window(current_page: u64, last_page: u64, window_size: u64) -> Vec<PagerItem> {
    let current_page = current_page.min(last_page);
    let window_size = window_size.max(1).min(last_page + 1);

    let mut start = current_page.saturating_sub(window_size / 2);
    if start + window_size > last_page + 1 {
        start = last_page + 1 - window_size;
    }
    let end = start + window_size - 1;

    let mut items = Vec::new();
    if start > 0 {
        items.push(PagerItem::Page(0));
        if start > 1 {
            items.push(PagerItem::Gap);
        }
    }
    items.extend((start..=end).map(PagerItem::Page));
    if end < last_page {
        if end + 1 < last_page {
            items.push(PagerItem::Gap);
        }
        items.push(PagerItem::Page(last_page));
    }
    items
}

/// Sizes offered by the page-size selector; the current size is always offered.
pub fn page_size_options(option_list: Option<&[u64]>, current_page_size: u64) -> Vec<u64> {
    let mut options = option_list
        .unwrap_or_default()
        .iter()
        .copied()
        .filter(|size| *size > 0)
        .collect::<BTreeSet<_>>();
    if current_page_size > 0 {
        options.insert(current_page_size);
    }
    options.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use PagerItem::{Gap, Page};

    #[rstest]
    #[case(Some(45), Some(20), 2)]
    #[case(Some(40), Some(20), 1)]
    #[case(Some(3), Some(20), 0)]
    #[case(Some(0), Some(20), 0)]
    #[case(None, Some(20), 0)]
    #[case(Some(10), Some(0), 0)]
    #[case(Some(10), None, 0)]
    fn computes_last_page(#[case] total: Option<u64>, #[case] page_size: Option<u64>, #[case] expected: u64) {
        assert_eq!(last_page(total, page_size), expected);
    }

    #[rstest]
    fn single_page_window() {
        assert_eq!(page_window(0, 0, 3), vec![Page(0)]);
    }

    #[rstest]
    fn window_in_the_middle() {
        assert_eq!(
            page_window(5, 10, 3),
            vec![Page(0), Gap, Page(4), Page(5), Page(6), Gap, Page(10)]
        );
    }

    #[rstest]
    fn window_clamped_to_start() {
        assert_eq!(page_window(0, 10, 3), vec![Page(0), Page(1), Page(2), Gap, Page(10)]);
    }

    #[rstest]
    fn window_clamped_to_end() {
        assert_eq!(page_window(10, 10, 3), vec![Page(0), Gap, Page(8), Page(9), Page(10)]);
    }

    #[rstest]
    fn window_adjacent_to_ends_has_no_gaps() {
        assert_eq!(page_window(2, 4, 3), vec![Page(0), Page(1), Page(2), Page(3), Page(4)]);
    }

    #[rstest]
    fn window_wider_than_result() {
        assert_eq!(page_window(1, 2, 5), vec![Page(0), Page(1), Page(2)]);
    }

    #[rstest]
    fn current_page_past_the_end_is_clamped() {
        assert_eq!(page_window(9, 2, 3), vec![Page(0), Page(1), Page(2)]);
    }

    #[rstest]
    fn page_size_options_include_current() {
        assert_eq!(page_size_options(Some(&[5, 10, 20][..]), 7), vec![5, 7, 10, 20]);
        assert_eq!(page_size_options(Some(&[5, 10, 20][..]), 10), vec![5, 10, 20]);
        assert_eq!(page_size_options(None, 20), vec![20]);
    }
}
