//! Pagination over the current row order.

use std::ops::Range;

use crate::error::PageError;

/// Page settings for a table.
///
/// Pages are numbered from 1. A page past the end is valid and simply
/// empty, so a table can keep its page number while rows are replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    per_page: usize,
}

impl Pagination {
    /// Creates pagination settings.
    pub fn new(page: usize, per_page: usize) -> Result<Self, PageError> {
        if page == 0 {
            return Err(PageError::InvalidPage(page));
        }
        if per_page == 0 {
            return Err(PageError::InvalidPageSize(per_page));
        }
        Ok(Self { page, per_page })
    }

    /// Returns the current page number.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the number of rows per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Returns a copy pointing at another page.
    pub fn with_page(self, page: usize) -> Result<Self, PageError> {
        Self::new(page, self.per_page)
    }

    /// Returns a copy pointing at the first page.
    pub fn first(self) -> Self {
        Self { page: 1, ..self }
    }

    /// Returns the number of pages needed for `total_rows`, at least 1.
    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.per_page).max(1)
    }

    /// Returns the index range of the current page within `total_rows`.
    pub fn range(&self, total_rows: usize) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.per_page).min(total_rows);
        let end = start.saturating_add(self.per_page).min(total_rows);
        start..end
    }

    /// Slices the current page out of `rows`.
    pub fn apply<'a, R>(&self, rows: &'a [R]) -> Page<'a, R> {
        Page {
            rows: &rows[self.range(rows.len())],
            page: self.page,
            total_pages: self.total_pages(rows.len()),
            total_rows: rows.len(),
        }
    }
}

/// One page of rows with its position in the whole row set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, R> {
    rows: &'a [R],
    page: usize,
    total_pages: usize,
    total_rows: usize,
}

impl<'a, R> Page<'a, R> {
    /// Returns the rows on this page.
    pub fn rows(&self) -> &'a [R] {
        self.rows
    }

    /// Returns the page number.
    pub fn number(&self) -> usize {
        self.page
    }

    /// Returns the total number of pages.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the number of rows across all pages.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Returns `true` if a following page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns `true` if a preceding page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}
