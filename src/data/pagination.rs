//! Page windowing over the static project list.
//!
//! The current page always stays within `[1, total_pages]`, where
//! `total_pages = ceil(total / per_page)` (and at least 1, so an empty
//! list still has a valid "page 1 of 1"). Moving past either boundary is
//! a no-op; the UI renders the corresponding control as disabled.

use std::ops::Range;

/// Fixed page size for the Projects view.
pub const PROJECTS_PER_PAGE: usize = 12;

/// Transient pagination state. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    per_page: usize,
    total: usize,
}

impl Pagination {
    /// Create pagination over `total` records, starting at page 1.
    pub fn new(total: usize, per_page: usize) -> Self {
        Self { page: 1, per_page: per_page.max(1), total }
    }

    /// Current page number, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Total number of pages, at least 1.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page).max(1)
    }

    /// Whether the "previous" action is available.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether the "next" action is available.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Move to the previous page. No-op on page 1.
    pub fn prev(&mut self) {
        if self.has_prev() {
            self.page -= 1;
        }
    }

    /// Move to the next page. No-op on the last page.
    pub fn next(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    /// Index range of the records on the current page.
    pub fn bounds(&self) -> Range<usize> {
        let start = (self.page - 1) * self.per_page;
        let end = (start + self.per_page).min(self.total);
        start..end.max(start)
    }

    /// Number of records on the current page.
    pub fn page_len(&self) -> usize {
        self.bounds().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(Pagination::new(27, 12).total_pages(), 3);
        assert_eq!(Pagination::new(24, 12).total_pages(), 2);
        assert_eq!(Pagination::new(1, 12).total_pages(), 1);
        assert_eq!(Pagination::new(0, 12).total_pages(), 1);
    }

    #[test]
    fn test_boundaries_disable_controls() {
        let mut p = Pagination::new(27, 12);
        assert!(!p.has_prev());
        assert!(p.has_next());

        p.next();
        assert!(p.has_prev());
        assert!(p.has_next());

        p.next();
        assert_eq!(p.page(), 3);
        assert!(!p.has_next());

        // Past-the-end is a no-op
        p.next();
        assert_eq!(p.page(), 3);

        p.prev();
        p.prev();
        assert_eq!(p.page(), 1);
        p.prev();
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_page_bounds() {
        let mut p = Pagination::new(27, 12);
        assert_eq!(p.bounds(), 0..12);
        assert_eq!(p.page_len(), 12);

        p.next();
        assert_eq!(p.bounds(), 12..24);

        p.next();
        // Last page is short
        assert_eq!(p.bounds(), 24..27);
        assert_eq!(p.page_len(), 3);
    }

    #[test]
    fn test_empty_list() {
        let p = Pagination::new(0, 12);
        assert_eq!(p.page(), 1);
        assert_eq!(p.bounds(), 0..0);
        assert!(!p.has_prev());
        assert!(!p.has_next());
    }
}
