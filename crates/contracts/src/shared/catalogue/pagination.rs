//! Page-based slicing of the filtered list

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 24;

/// Requested page (1-based) and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// At least one page, even for an empty list
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size).max(1)
    }

    pub fn current_page(&self, total_items: usize) -> usize {
        self.page.clamp(1, self.total_pages(total_items))
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Store the clamped page so later growth of the list does not jump back
    pub fn clamp_to(&mut self, total_items: usize) {
        self.page = self.current_page(total_items);
    }

    /// Index range of the current page within a list of `total_items`
    pub fn range(&self, total_items: usize) -> Range<usize> {
        let start = (self.current_page(total_items) - 1) * self.page_size;
        let start = start.min(total_items);
        let end = (start + self.page_size).min(total_items);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }
}

/// Entry in a page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Gap,
}

/// First, last and two pages either side of `current`, with gaps between
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageLink> {
    let total = total_pages.max(1);
    let current = current.clamp(1, total);
    let mut links = Vec::new();
    let mut last = 0;
    for page in 1..=total {
        let near = page + 2 >= current && page <= current + 2;
        if page == 1 || page == total || near {
            if last != 0 && page > last + 1 {
                links.push(PageLink::Gap);
            }
            links.push(PageLink::Page(page));
            last = page;
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_and_clamping() {
        let mut p = Pagination::new(24);
        assert_eq!(p.total_pages(50), 3);
        assert_eq!(p.total_pages(0), 1);

        p.set_page(10);
        assert_eq!(p.current_page(50), 3);
        assert_eq!(p.range(50), 48..50);

        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.current_page(10), 1);
        assert_eq!(p.range(10), 0..10);
    }

    #[test]
    fn test_slice_and_empty_list() {
        let items: Vec<u32> = (1..=30).collect();
        let mut p = Pagination::new(24);
        p.set_page(2);
        assert_eq!(p.slice(&items), &[25, 26, 27, 28, 29, 30]);

        let empty: Vec<u32> = Vec::new();
        assert!(p.slice(&empty).is_empty());
        assert_eq!(p.current_page(0), 1);
    }

    #[test]
    fn test_zero_page_size_is_raised() {
        let p = Pagination::new(0);
        assert_eq!(p.page_size(), 1);
    }

    #[test]
    fn test_page_window() {
        use PageLink::*;
        assert_eq!(page_window(1, 1), vec![Page(1)]);
        assert_eq!(
            page_window(1, 10),
            vec![Page(1), Page(2), Page(3), Gap, Page(10)]
        );
        assert_eq!(
            page_window(6, 10),
            vec![Page(1), Gap, Page(4), Page(5), Page(6), Page(7), Page(8), Gap, Page(10)]
        );
        assert_eq!(page_window(4, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
    }
}
