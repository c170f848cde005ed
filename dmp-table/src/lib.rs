//! Stateful sortable table component for the DMP front-end.
//!
//! # Example
//!
//! ```
//! use dmp_table::{SortOutcome, Table, TableProps};
//! use dmp_table_lib::model::{Column, ColumnSet, Row};
//!
//! let columns = ColumnSet::new(vec![
//!     Column::new("name", "Name").row_header().sortable(),
//!     Column::new("created", "Created").sortable(),
//! ])
//! .unwrap();
//! let rows = vec![
//!     Row::new(1).set("name", "Bob").set("created", "01/02/2024"),
//!     Row::new(2).set("name", "Amy").set("created", "15/01/2024"),
//! ];
//!
//! let table = Table::new(TableProps::new("Plans", columns, rows));
//! assert_eq!(table.on_header_click("name"), SortOutcome::Sorted);
//! assert_eq!(table.row_keys(), ["2", "1"]);
//! ```

pub mod table;

pub use table::*;
