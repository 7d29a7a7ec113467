//! Page option derivation for paged list requests.
//!
//! Page numbers are 1-based externally and converted to 0-based at the
//! request boundary. The current page clamps into the valid range whenever
//! the total count or the page size changes.

/// Derived paging state for a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    /// 1-based current page, clamped to `1..=total_pages`.
    pub current_page: u32,
    pub page_size: u32,
    pub total_count: u64,
    /// `ceil(total_count / page_size)`, at least 1.
    pub total_pages: u32,
}

/// How many page number buttons one pager block shows.
const PAGE_BLOCK_SIZE: u32 = 10;

impl PageOptions {
    pub fn new(requested_page: u32, page_size: u32, total_count: u64) -> Self {
        let size = page_size.max(1);
        let total_pages = (total_count.div_ceil(size as u64) as u32).max(1);
        Self {
            current_page: requested_page.clamp(1, total_pages),
            page_size: size,
            total_count,
            total_pages,
        }
    }

    /// 0-based page index for the wire request.
    pub fn request_page(&self) -> u32 {
        self.current_page - 1
    }

    /// Page numbers of the block containing the current page.
    pub fn page_numbers(&self) -> Vec<u32> {
        let block_start = ((self.current_page - 1) / PAGE_BLOCK_SIZE) * PAGE_BLOCK_SIZE + 1;
        let block_end = (block_start + PAGE_BLOCK_SIZE - 1).min(self.total_pages);
        (block_start..=block_end).collect()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let options = PageOptions::new(1, 20, 25);
        assert_eq!(options.total_pages, 2);
        assert_eq!(options.current_page, 1);
        assert_eq!(options.request_page(), 0);
    }

    #[test]
    fn test_size_change_collapses_to_single_page() {
        // 25 rows at size 50: one page, and a stale page 2 clamps back to 1.
        let options = PageOptions::new(2, 50, 25);
        assert_eq!(options.total_pages, 1);
        assert_eq!(options.current_page, 1);
    }

    #[test]
    fn test_current_page_clamps_to_range() {
        assert_eq!(PageOptions::new(9, 20, 45).current_page, 3);
        assert_eq!(PageOptions::new(0, 20, 45).current_page, 1);
    }

    #[test]
    fn test_empty_result_still_has_one_page() {
        let options = PageOptions::new(1, 20, 0);
        assert_eq!(options.total_pages, 1);
        assert!(!options.has_previous());
        assert!(!options.has_next());
    }

    #[test]
    fn test_page_numbers_are_windowed_in_blocks() {
        let options = PageOptions::new(3, 10, 1000);
        assert_eq!(options.page_numbers(), (1..=10).collect::<Vec<_>>());

        let options = PageOptions::new(11, 10, 1000);
        assert_eq!(options.page_numbers(), (11..=20).collect::<Vec<_>>());

        let options = PageOptions::new(11, 10, 125);
        assert_eq!(options.page_numbers(), (11..=13).collect::<Vec<_>>());
    }
}
