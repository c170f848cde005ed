//! Server-side ordering for delegated sorts.
//!
//! When a table hands sorting to its owner, the owner needs the active sort
//! columns in a form a backend understands:
//!
//! - [`OrderBy`] - Ordering specification built from a column set

mod order;

pub use order::OrderBy;
