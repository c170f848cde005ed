//! Column definitions and column sets

use std::collections::HashSet;
use std::ops::Deref;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ColumnError;

/// Sort direction of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9, oldest first).
    Ascending,
    /// Descending order (Z-A, 9-0, newest first).
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns the short keyword used in ordering strings (`asc` / `desc`).
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// A table column definition.
///
/// The `id` doubles as the row field key and the sort key. `direction` is
/// the only mutable part: it is changed by sort interactions and is unset
/// when the column takes no part in the current sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Stable identifier, unique within a column set.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Whether this column's cell is the row's accessible header.
    #[serde(default)]
    pub is_row_header: bool,
    /// Whether user interaction may toggle sort on this column.
    #[serde(default)]
    pub allows_sorting: bool,
    /// Current sort direction, if the column is sorted.
    #[serde(default)]
    pub direction: Option<SortDirection>,
}

impl Column {
    /// Creates a new, unsorted, non-sortable column.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_row_header: false,
            allows_sorting: false,
            direction: None,
        }
    }

    /// Marks this column as the row header.
    pub fn row_header(mut self) -> Self {
        self.is_row_header = true;
        self
    }

    /// Allows sorting on this column.
    pub fn sortable(self) -> Self {
        self.sortable_if(true)
    }

    /// Sets whether sorting is allowed on this column.
    pub fn sortable_if(mut self, allows_sorting: bool) -> Self {
        self.allows_sorting = allows_sorting;
        self
    }

    /// Sets the initial sort direction.
    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Returns `true` if this column takes part in the current sort.
    pub fn is_active(&self) -> bool {
        self.allows_sorting && self.direction.is_some()
    }
}

/// An ordered set of columns with unique ids.
///
/// Order is display order and also sort priority: the first active column
/// is the primary sort key, the next one breaks its ties, and so on.
///
/// # Example
///
/// ```
/// use dmp_table_lib::model::{Column, ColumnSet, SortDirection};
///
/// let columns = ColumnSet::new(vec![
///     Column::new("title", "Title").row_header().sortable(),
///     Column::new("created", "Created").sortable(),
/// ])
/// .unwrap();
///
/// let sorted = columns.with_direction("created", Some(SortDirection::Descending)).unwrap();
/// assert_eq!(sorted.active().count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    /// Creates a column set, rejecting duplicate ids.
    pub fn new(columns: Vec<Column>) -> Result<Self, ColumnError> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.id.as_str()) {
                return Err(ColumnError::duplicate(&column.id));
            }
        }
        Ok(Self { columns })
    }

    /// Returns the columns as a slice.
    pub fn as_slice(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column with the given id.
    pub fn get(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Returns the display position of the column with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    /// Returns the active sort columns in priority order.
    pub fn active(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_active())
    }

    /// Returns `true` if any column takes part in the current sort.
    pub fn has_active(&self) -> bool {
        self.columns.iter().any(Column::is_active)
    }

    /// Returns a copy of the set with one column's direction changed.
    ///
    /// Every other column keeps its direction.
    pub fn with_direction(
        &self,
        id: &str,
        direction: Option<SortDirection>,
    ) -> Result<Self, ColumnError> {
        let index = self.position(id).ok_or_else(|| ColumnError::unknown(id))?;
        if !self.columns[index].allows_sorting {
            return Err(ColumnError::not_sortable(id));
        }
        let mut columns = self.columns.clone();
        columns[index].direction = direction;
        Ok(Self { columns })
    }

    /// Returns a copy of the set with every direction cleared.
    pub fn cleared(&self) -> Self {
        let columns = self
            .columns
            .iter()
            .cloned()
            .map(|mut c| {
                c.direction = None;
                c
            })
            .collect();
        Self { columns }
    }
}

impl Deref for ColumnSet {
    type Target = [Column];

    fn deref(&self) -> &[Column] {
        &self.columns
    }
}

impl AsRef<[Column]> for ColumnSet {
    fn as_ref(&self) -> &[Column] {
        &self.columns
    }
}

impl TryFrom<Vec<Column>> for ColumnSet {
    type Error = ColumnError;

    fn try_from(columns: Vec<Column>) -> Result<Self, Self::Error> {
        Self::new(columns)
    }
}

impl From<ColumnSet> for Vec<Column> {
    fn from(set: ColumnSet) -> Self {
        set.columns
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
