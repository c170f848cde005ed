//! Sort interaction handling for the Table component.

use std::borrow::Cow;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use dmp_table_lib::model::{ColumnSet, SortDirection, TableRow};
use dmp_table_lib::sort::sort_rows;

use super::state::Table;

/// Result of a sort interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    /// Nothing changed (unknown or unsortable column, or same direction).
    Ignored,
    /// Rows were re-sorted in memory.
    Sorted,
    /// The updated column set was handed to the `on_sort_change` handler.
    Delegated,
}

impl SortOutcome {
    /// Returns `true` if the column state changed.
    pub fn is_changed(&self) -> bool {
        !matches!(self, SortOutcome::Ignored)
    }
}

impl<R: TableRow + Clone> Table<R> {
    /// Set the sort direction of one column.
    ///
    /// Only `column_id` changes; directions already set on other columns
    /// are kept, so repeated calls build up a multi-column sort. Passing
    /// `None` removes the column from the sort.
    pub fn sort_column(&self, column_id: &str, direction: Option<SortDirection>) -> SortOutcome {
        let table_id = self.id();
        self.update_columns(|columns| {
            match columns.with_direction(column_id, direction) {
                Ok(next) if next == *columns => None,
                Ok(next) => Some(next),
                Err(e) => {
                    log::debug!("Ignoring sort on {}: {}", table_id, e);
                    None
                }
            }
        })
    }

    /// Handle activation of a column header.
    ///
    /// An unsorted or descending column becomes ascending; an ascending
    /// column becomes descending.
    pub fn on_header_click(&self, column_id: &str) -> SortOutcome {
        let table_id = self.id();
        self.update_columns(|columns| {
            let next = columns
                .get(column_id)
                .and_then(|c| c.direction)
                .map_or(SortDirection::Ascending, SortDirection::toggle);
            columns
                .with_direction(column_id, Some(next))
                .inspect_err(|e| log::debug!("Ignoring header click on {}: {}", table_id, e))
                .ok()
        })
    }

    /// Clear the sort direction of every column.
    pub fn clear_sort(&self) -> SortOutcome {
        self.update_columns(|columns| {
            let cleared = columns.cleared();
            (cleared != *columns).then_some(cleared)
        })
    }

    /// Apply a column-state change and react to it.
    ///
    /// `update` returns the new column set, or `None` to leave the table
    /// untouched. The handler, if any, runs after the lock is released so it
    /// may call back into the table.
    fn update_columns<F>(&self, update: F) -> SortOutcome
    where
        F: FnOnce(&ColumnSet) -> Option<ColumnSet>,
    {
        let delegated = {
            let Ok(mut guard) = self.inner.write() else {
                return SortOutcome::Ignored;
            };
            let Some(columns) = update(&guard.columns) else {
                return SortOutcome::Ignored;
            };

            let inner = &mut *guard;
            inner.columns = columns;
            inner.pagination = inner.pagination.map(|p| p.first());
            self.dirty.store(true, Ordering::SeqCst);

            match &inner.on_sort_change {
                Some(handler) => Some((Arc::clone(handler), inner.columns.clone())),
                None => {
                    let sorted = match sort_rows(&inner.rows, &inner.columns) {
                        Cow::Owned(sorted) => Some(sorted),
                        Cow::Borrowed(_) => None,
                    };
                    if let Some(sorted) = sorted {
                        inner.rows = sorted;
                    }
                    None
                }
            }
        };

        match delegated {
            Some((handler, columns)) => {
                log::debug!("Delegating sort on {} to on_sort_change", self.id());
                handler(&columns);
                SortOutcome::Delegated
            }
            None => SortOutcome::Sorted,
        }
    }
}
