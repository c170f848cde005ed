//! Data table model and sort engine for the DMP front-end.
//!
//! A table is a [`ColumnSet`](model::ColumnSet) plus a list of rows. Each
//! column may carry a sort direction; every column with one takes part in
//! the sort, in column order. The [`sort`] module sorts rows in memory, and
//! [`query::OrderBy`] describes the same ordering for a backend when sorting
//! is delegated.

pub mod document;
pub mod error;
pub mod model;
pub mod page;
pub mod query;
pub mod sort;

pub use document::TableDocument;
