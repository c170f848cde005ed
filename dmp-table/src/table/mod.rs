//! Table component - a sortable, paginated data table.
//!
//! Sorting is done in memory unless the owner supplies an `on_sort_change`
//! handler, in which case the owner is told about the new column state and
//! is expected to supply re-ordered rows itself (for example after a
//! backend query).

mod events;
mod render;
mod state;

pub use events::SortOutcome;
pub use render::{CellView, HeaderView, PageInfo, RowView, SortGlyph, TableView};
pub use state::{SortChangeHandler, Table, TableId, TableProps, WeakTable};
