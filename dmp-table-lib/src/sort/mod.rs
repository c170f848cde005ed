//! Client-side multi-column sort engine.
//!
//! Sorting in memory is meant for small tables. Large or paged datasets
//! should delegate ordering to the backend through [`OrderBy`] instead.

mod compare;
mod merge;

pub use compare::*;

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::model::Column;
use crate::model::SortDirection;
use crate::model::TableRow;
use crate::query::OrderBy;

/// Sorts rows by every active column, in column-set order.
///
/// A column is active when it allows sorting and has a direction. The first
/// active column is the primary key and each following one breaks the ties
/// left by the previous ones. Rows that compare equal on every key keep
/// their relative order.
///
/// Neither input is mutated. When no column is active the input slice is
/// returned as-is (`Cow::Borrowed`); otherwise a new vector is returned.
///
/// # Example
///
/// ```
/// use dmp_table_lib::model::{Column, Row, SortDirection, TableRow};
/// use dmp_table_lib::sort::sort_rows;
///
/// let columns = vec![Column::new("n", "N").sortable().with_direction(SortDirection::Ascending)];
/// let rows = vec![Row::new(1).set("n", "10"), Row::new(2).set("n", "9")];
///
/// let sorted = sort_rows(&rows, &columns);
/// assert_eq!(sorted[0].key(), "2");
/// ```
pub fn sort_rows<'a, R>(rows: &'a [R], columns: &[Column]) -> Cow<'a, [R]>
where
    R: TableRow + Clone,
{
    let keys: Vec<(&str, SortDirection)> = columns
        .iter()
        .filter_map(|c| match c.direction {
            Some(direction) if c.allows_sorting => Some((c.id.as_str(), direction)),
            _ => None,
        })
        .collect();

    if keys.is_empty() {
        return Cow::Borrowed(rows);
    }

    log::debug!("Sorting {} rows by {:?}", rows.len(), keys);
    Cow::Owned(sort_by_keys(rows, &keys))
}

/// Sorts rows by an explicit ordering.
///
/// Fields named by the ordering are not checked against any column set;
/// rows without the field sort as if the cell were null.
pub fn sort_rows_by<R>(rows: &[R], order: &OrderBy) -> Vec<R>
where
    R: TableRow + Clone,
{
    let keys: Vec<(&str, SortDirection)> = order
        .fields()
        .iter()
        .map(|(field, direction)| (field.as_str(), *direction))
        .collect();
    sort_by_keys(rows, &keys)
}

/// Compares two rows by the given sort keys.
///
/// Returns the first non-equal comparison, or `Equal` if every key ties.
pub fn compare_rows<R: TableRow>(a: &R, b: &R, keys: &[(&str, SortDirection)]) -> Ordering {
    for &(field, direction) in keys {
        let ordering = compare_cells(a.cell(field), b.cell(field), direction);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn sort_by_keys<R>(rows: &[R], keys: &[(&str, SortDirection)]) -> Vec<R>
where
    R: TableRow + Clone,
{
    let mut order: Vec<&R> = rows.iter().collect();
    merge::stable_sort(&mut order, |a, b| compare_rows(*a, *b, keys));
    order.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    fn keys(rows: &[Row]) -> Vec<String> {
        rows.iter().map(TableRow::key).collect()
    }

    #[test]
    fn test_no_active_column_borrows_input() {
        let rows = vec![Row::new(1).set("n", 2), Row::new(2).set("n", 1)];
        let columns = vec![
            Column::new("n", "N").sortable(),
            // Direction without permission to sort does not count.
            Column::new("m", "M").with_direction(SortDirection::Ascending),
        ];

        let sorted = sort_rows(&rows, &columns);
        assert!(matches!(sorted, Cow::Borrowed(_)));
        assert!(std::ptr::eq(sorted.as_ptr(), rows.as_ptr()));
    }

    #[test]
    fn test_descending_numbers() {
        let rows = vec![
            Row::new("a").set("n", "2"),
            Row::new("b").set("n", 10i32),
            Row::new("c").set("n", 1.5),
        ];
        let columns = vec![
            Column::new("n", "N")
                .sortable()
                .with_direction(SortDirection::Descending),
        ];
        assert_eq!(keys(&sort_rows(&rows, &columns)), ["b", "a", "c"]);
    }

    #[test]
    fn test_sort_rows_by_order() {
        let rows = vec![
            Row::new(1).set("funder", "NSF").set("amount", 500),
            Row::new(2).set("funder", "NIH").set("amount", 100),
            Row::new(3).set("funder", "NSF").set("amount", 900),
            Row::new(4).set("amount", 50),
        ];
        let order = OrderBy::asc("funder").then_desc("amount");
        assert_eq!(keys(&sort_rows_by(&rows, &order)), ["2", "3", "1", "4"]);
    }
}
