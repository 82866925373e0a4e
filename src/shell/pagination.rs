use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page bookkeeping for one list view.
///
/// Pages are 1-based. The item count belongs to the caller and is pushed in
/// through [`Pager::set_total_items`]; every request is clamped rather than
/// rejected, so `1 <= current_page <= total_pages` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

/// Snapshot handed to whatever renders the page controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub first_item: usize,
    pub last_item: usize,
    pub can_go_next: bool,
    pub can_go_previous: bool,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items,
        }
    }

    pub fn with_page(total_items: usize, page_size: usize, page: i64) -> Self {
        let mut pager = Self::new(total_items, page_size);
        pager.go_to_page(page);
        pager
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Ceiling of `total_items / page_size`; an empty list still has page 1.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn go_to_page(&mut self, page: i64) {
        let last = i64::try_from(self.total_pages()).unwrap_or(i64::MAX);
        // clamp() keeps the value within 1..=last, so the cast is lossless
        self.current_page = page.clamp(1, last) as usize;
        log::debug!("page {} of {}", self.current_page, self.total_pages());
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.current_page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.can_go_previous() {
            self.current_page -= 1;
        }
    }

    pub fn first_page(&mut self) {
        self.current_page = 1;
    }

    pub fn last_page(&mut self) {
        self.current_page = self.total_pages();
    }

    /// Changing the density invalidates the old offset, so this always
    /// returns to page 1. A zero size is treated as 1.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.current_page = 1;
        log::debug!("page size {}", self.page_size);
    }

    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = self.current_page.min(self.total_pages());
    }

    /// Slice of `items` visible on the current page.
    ///
    /// `items` is expected to be the collection `total_items` was taken from,
    /// but that is not checked; the bounds saturate at `items.len()`.
    pub fn paged_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    /// 1-based index of the first item shown, 0 when there is nothing.
    pub fn first_item(&self) -> usize {
        if self.total_items == 0 {
            0
        } else {
            (self.current_page - 1) * self.page_size + 1
        }
    }

    pub fn last_item(&self) -> usize {
        (self.current_page * self.page_size).min(self.total_items)
    }

    pub fn state(&self) -> PageState {
        PageState {
            current_page: self.current_page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages(),
            first_item: self.first_item(),
            last_item: self.last_item(),
            can_go_next: self.can_go_next(),
            can_go_previous: self.can_go_previous(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_twenty_three_items_in_pages_of_ten() {
        let items: Vec<u32> = (1..=23).collect();
        let mut pager = Pager::new(items.len(), 10);

        assert_eq!(pager.total_pages(), 3);
        assert_eq!(pager.paged_items(&items).len(), 10);
        pager.next_page();
        assert_eq!(pager.paged_items(&items), &items[10..20]);
        pager.next_page();
        assert_eq!(pager.paged_items(&items), &[21, 22, 23]);
        assert!(!pager.can_go_next());
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let pager = Pager::new(0, 10);
        let items: Vec<String> = Vec::new();

        assert_eq!(pager.total_pages(), 1);
        assert_eq!(pager.current_page(), 1);
        assert!(pager.paged_items(&items).is_empty());
        assert!(!pager.can_go_next());
        assert!(!pager.can_go_previous());
        assert_eq!((pager.first_item(), pager.last_item()), (0, 0));
    }

    #[test]
    fn test_go_to_page_saturates() {
        let mut pager = Pager::new(45, 10);

        pager.go_to_page(-3);
        assert_eq!(pager.current_page(), 1);
        pager.go_to_page(0);
        assert_eq!(pager.current_page(), 1);
        pager.go_to_page(i64::MAX);
        assert_eq!(pager.current_page(), 5);
        pager.go_to_page(3);
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn test_next_and_previous_stop_at_edges() {
        let mut pager = Pager::new(15, 10);

        pager.previous_page();
        assert_eq!(pager.current_page(), 1);
        pager.next_page();
        pager.next_page();
        assert_eq!(pager.current_page(), 2);
        pager.previous_page();
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_first_and_last_page() {
        let mut pager = Pager::new(42, 5);

        pager.last_page();
        assert_eq!(pager.current_page(), 9);
        assert_eq!((pager.first_item(), pager.last_item()), (41, 42));
        pager.first_page();
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut pager = Pager::with_page(100, 10, 7);
        assert_eq!(pager.current_page(), 7);

        pager.set_page_size(20);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.total_pages(), 5);

        pager.set_page_size(0);
        assert_eq!(pager.page_size(), 1);
    }

    #[test]
    fn test_shrinking_total_clamps_current_page() {
        let mut pager = Pager::with_page(50, 10, 5);

        pager.set_total_items(12);
        assert_eq!(pager.current_page(), 2);
        pager.set_total_items(0);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_slice_shorter_than_total() {
        // caller passed fewer items than it reported
        let items = [1, 2, 3];
        let pager = Pager::with_page(30, 10, 2);

        assert!(pager.paged_items(&items).is_empty());
    }

    #[test]
    fn test_state_snapshot() {
        let pager = Pager::with_page(23, 10, 2);

        assert_eq!(
            pager.state(),
            PageState {
                current_page: 2,
                page_size: 10,
                total_items: 23,
                total_pages: 3,
                first_item: 11,
                last_item: 20,
                can_go_next: true,
                can_go_previous: true,
            }
        );
    }

    proptest! {
        #[test]
        fn go_to_page_stays_in_range(total in 0usize..10_000, size in 1usize..200, page in any::<i64>()) {
            let mut pager = Pager::new(total, size);
            pager.go_to_page(page);
            prop_assert!(pager.current_page() >= 1);
            prop_assert!(pager.current_page() <= pager.total_pages());
        }

        #[test]
        fn set_page_size_always_resets(total in 0usize..10_000, page in any::<i64>(), size in 0usize..500) {
            let mut pager = Pager::with_page(total, 10, page);
            pager.set_page_size(size);
            prop_assert_eq!(pager.current_page(), 1);
        }

        #[test]
        fn pages_cover_every_item_once(total in 0usize..500, size in 1usize..50) {
            let items: Vec<usize> = (0..total).collect();
            let mut pager = Pager::new(total, size);
            let mut seen = Vec::new();
            loop {
                seen.extend_from_slice(pager.paged_items(&items));
                if !pager.can_go_next() {
                    break;
                }
                pager.next_page();
            }
            prop_assert_eq!(seen, items);
        }
    }
}
