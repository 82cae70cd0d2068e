//! Fixed-size pagination shared by every paged table.
//!
//! Handles:
//! - Page bounds (`1..=total_pages`, never empty)
//! - 1-based display ranges for the "showing X-Y of N" caption
//! - Page-number controls with ellipsis compaction
//!
//! Out-of-range page requests are ignored rather than reported.

use serde::{Serialize, Serializer};
use std::fmt;

/// Rows per page in the module tables.
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// Pages shown on each side of the current page in the controls.
const PAGE_WINDOW: usize = 2;

/// `max(1, ceil(item_count / page_size))`
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1)).max(1)
}

/// Current page of a paged collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    current_page: usize,
    page_size: usize,
    total_pages: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// State positioned on page 1 of a collection of `item_count` items.
    pub fn new(item_count: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            current_page: 1,
            page_size,
            total_pages: total_pages(item_count, page_size),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn contains(&self, page: usize) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    /// Moves to `page` if it exists. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        if !self.contains(page) {
            tracing::debug!(
                page,
                total_pages = self.total_pages,
                "ignoring out-of-range page request"
            );
            return false;
        }
        let changed = self.current_page != page;
        self.current_page = page;
        changed
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current_page + 1)
    }

    pub fn previous(&mut self) -> bool {
        match self.current_page.checked_sub(1) {
            Some(page) => self.go_to(page),
            None => false,
        }
    }

    /// Back to page 1 for a replaced collection of `item_count` items.
    pub fn reset(&mut self, item_count: usize) {
        self.current_page = 1;
        self.total_pages = total_pages(item_count, self.page_size);
    }

    pub fn page_items(&self) -> Vec<PageItem> {
        build_page_items(self.current_page, self.total_pages)
    }
}

/// One page of a slice together with its display metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
    /// 1-based index of the first row on the page.
    pub page_start: usize,
    /// 1-based index of the last row on the page, inclusive.
    pub page_end: usize,
    pub total_items: usize,
}

/// Slices `items` to `page` (1-based). Returns `None` for a page outside
/// `1..=total_pages`.
///
/// For an empty collection page 1 exists and yields `page_start = 1`,
/// `page_end = 0`.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Option<Page<'_, T>> {
    let page_size = page_size.max(1);
    let total = total_pages(items.len(), page_size);
    if page == 0 || page > total {
        return None;
    }

    let start = (page - 1) * page_size;
    let end = (page * page_size).min(items.len());

    Some(Page {
        items: &items[start.min(end)..end],
        page,
        total_pages: total,
        page_start: start + 1,
        page_end: end,
        total_items: items.len(),
    })
}

/// Entry in the page-number controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{n}"),
            PageItem::Ellipsis => f.write_str("..."),
        }
    }
}

impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(n) => serializer.serialize_u64(*n as u64),
            PageItem::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Page-number controls for `current` of `total` pages.
///
/// Always shows the first and last page and every page within two of the
/// current one; each skipped run collapses into a single ellipsis.
pub fn build_page_items(current: usize, total: usize) -> Vec<PageItem> {
    if total <= 1 {
        return vec![PageItem::Page(1)];
    }

    let current = current.clamp(1, total);
    let window_start = current.saturating_sub(PAGE_WINDOW).max(1);
    let window_end = (current + PAGE_WINDOW).min(total);

    let visible = std::iter::once(1)
        .chain(window_start..=window_end)
        .chain(std::iter::once(total));

    let mut items = Vec::new();
    let mut last_shown = 0;
    for page in visible {
        if page <= last_shown {
            continue;
        }
        if last_shown != 0 && page - last_shown > 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(page));
        last_shown = page;
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use PageItem::{Ellipsis, Page as P};

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 7), 1);
        assert_eq!(total_pages(7, 7), 1);
        assert_eq!(total_pages(8, 7), 2);
        assert_eq!(total_pages(21, 7), 3);
    }

    #[test]
    fn test_paginate_display_range() {
        let items: Vec<u32> = (1..=17).collect();
        let first = paginate(&items, 1, 7).unwrap();
        assert_eq!(first.items, &[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!((first.page_start, first.page_end), (1, 7));
        assert_eq!(first.total_pages, 3);

        let last = paginate(&items, 3, 7).unwrap();
        assert_eq!(last.items, &[15, 16, 17]);
        assert_eq!((last.page_start, last.page_end), (15, 17));
    }

    #[test]
    fn test_paginate_rejects_out_of_range() {
        let items: Vec<u32> = (1..=10).collect();
        assert!(paginate(&items, 0, 7).is_none());
        assert!(paginate(&items, 3, 7).is_none());
    }

    #[test]
    fn test_paginate_empty_collection() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, 7).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!((page.page_start, page.page_end), (1, 0));
    }

    #[test]
    fn test_page_state_ignores_invalid_pages() {
        let mut state = PageState::new(20, 7);
        assert_eq!(state.total_pages(), 3);
        assert!(!state.go_to(0));
        assert!(!state.go_to(4));
        assert_eq!(state.current_page(), 1);

        assert!(state.go_to(3));
        assert!(!state.next());
        assert_eq!(state.current_page(), 3);
        assert!(state.previous());
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_previous_on_first_page_is_noop() {
        let mut state = PageState::new(20, 7);
        assert!(!state.previous());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut state = PageState::new(30, 7);
        state.go_to(4);
        state.reset(3);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let state = PageState::new(3, 0);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn test_page_items_single_page() {
        assert_eq!(build_page_items(1, 1), vec![P(1)]);
        assert_eq!(build_page_items(1, 0), vec![P(1)]);
    }

    #[test]
    fn test_page_items_at_start() {
        assert_eq!(
            build_page_items(1, 10),
            vec![P(1), P(2), P(3), Ellipsis, P(10)]
        );
    }

    #[test]
    fn test_page_items_in_middle() {
        assert_eq!(
            build_page_items(5, 10),
            vec![P(1), Ellipsis, P(3), P(4), P(5), P(6), P(7), Ellipsis, P(10)]
        );
    }

    #[test]
    fn test_page_items_at_end() {
        assert_eq!(
            build_page_items(10, 10),
            vec![P(1), Ellipsis, P(8), P(9), P(10)]
        );
    }

    #[test]
    fn test_page_items_small_totals_have_no_ellipsis() {
        assert_eq!(build_page_items(2, 5), vec![P(1), P(2), P(3), P(4), P(5)]);
        assert_eq!(build_page_items(4, 4), vec![P(1), P(2), P(3), P(4)]);
    }

    #[test]
    fn test_page_item_serialization() {
        let json = serde_json::to_string(&build_page_items(1, 10)).unwrap();
        assert_eq!(json, r#"[1,2,3,"...",10]"#);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: concatenating every page reconstructs the input once.
            #[test]
            fn pages_reconstruct_sequence(len in 0usize..200, page_size in 1usize..15) {
                let items: Vec<usize> = (0..len).collect();
                let total = total_pages(len, page_size);
                let mut rebuilt = Vec::new();
                for page in 1..=total {
                    let slice = paginate(&items, page, page_size).unwrap();
                    prop_assert_eq!(slice.items.len(), slice.page_end + 1 - slice.page_start);
                    rebuilt.extend_from_slice(slice.items);
                }
                prop_assert_eq!(&rebuilt, &items);
                prop_assert!(paginate(&items, total + 1, page_size).is_none());
            }

            /// Property: page controls always show both endpoints and the
            /// current page, strictly increasing, with no adjacent ellipses.
            #[test]
            fn page_items_well_formed(total in 2usize..60, current in 1usize..60) {
                let current = current.min(total);
                let items = build_page_items(current, total);

                prop_assert_eq!(items.first(), Some(&PageItem::Page(1)));
                prop_assert_eq!(items.last(), Some(&PageItem::Page(total)));
                prop_assert!(items.contains(&PageItem::Page(current)));

                let pages: Vec<usize> = items
                    .iter()
                    .filter_map(|i| match i {
                        PageItem::Page(n) => Some(*n),
                        PageItem::Ellipsis => None,
                    })
                    .collect();
                prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
                prop_assert!(!items
                    .windows(2)
                    .any(|w| w[0] == PageItem::Ellipsis && w[1] == PageItem::Ellipsis));
            }

            /// Property: the current page stays within bounds whatever is requested.
            #[test]
            fn page_state_stays_in_bounds(
                count in 0usize..100,
                requests in prop::collection::vec(0usize..30, 0..20),
            ) {
                let mut state = PageState::new(count, DEFAULT_PAGE_SIZE);
                for page in requests {
                    state.go_to(page);
                    prop_assert!(state.contains(state.current_page()));
                }
            }
        }
    }
}
