//! Pagination errors

/// Errors raised by invalid pagination settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// Pages are numbered from 1.
    #[error("Invalid page {0}: pages start at 1")]
    InvalidPage(usize),

    /// A page must hold at least one row.
    #[error("Invalid page size {0}: must be at least 1")]
    InvalidPageSize(usize),
}
