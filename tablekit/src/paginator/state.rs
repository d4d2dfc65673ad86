//! Page bounds state machine.

use std::ops::Range;

/// Page size used when none is configured.
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Current page, page size and page count over a row set.
///
/// After every operation `1 <= current_page <= total_pages` and
/// `total_pages = max(1, ceil(row_count / rows_per_page))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    rows_per_page: usize,
    total_pages: usize,
    row_count: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS_PER_PAGE)
    }
}

impl PageState {
    /// Create state for an empty row set. A zero page size falls back to the
    /// default.
    pub fn new(rows_per_page: usize) -> Self {
        let rows_per_page = if rows_per_page > 0 {
            rows_per_page
        } else {
            DEFAULT_ROWS_PER_PAGE
        };
        Self {
            current_page: 1,
            rows_per_page,
            total_pages: 1,
            row_count: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Change the page size. Ignored unless `rows > 0`.
    ///
    /// Returns true when the page size changed.
    pub fn set_rows_per_page(&mut self, rows: usize) -> bool {
        if rows == 0 || rows == self.rows_per_page {
            return false;
        }
        self.rows_per_page = rows;
        self.recompute();
        true
    }

    /// Record a new row count and clamp the current page down if needed.
    pub fn set_row_count(&mut self, rows: usize) {
        self.row_count = rows;
        self.recompute();
    }

    /// Move to `target`, clamped into `[1, total_pages]`.
    ///
    /// Returns true when the current page changed.
    pub fn go_to(&mut self, target: usize) -> bool {
        let target = target.clamp(1, self.total_pages);
        if target == self.current_page {
            return false;
        }
        self.current_page = target;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current_page.saturating_add(1))
    }

    pub fn prev(&mut self) -> bool {
        self.go_to(self.current_page.saturating_sub(1))
    }

    pub fn first(&mut self) -> bool {
        self.go_to(1)
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.total_pages)
    }

    /// Row indices visible on the current page.
    pub fn window(&self) -> Range<usize> {
        let start = (self.current_page - 1) * self.rows_per_page;
        let end = start + self.rows_per_page;
        start.min(self.row_count)..end.min(self.row_count)
    }

    /// Page indicator text, `current/total`.
    pub fn display(&self) -> String {
        format!("{}/{}", self.current_page, self.total_pages)
    }

    fn recompute(&mut self) {
        self.total_pages = self.row_count.div_ceil(self.rows_per_page).max(1);
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }
}
