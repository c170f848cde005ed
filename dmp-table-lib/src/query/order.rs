//! Ordering specification for backend queries.

use std::fmt;

use crate::model::Column;
use crate::model::SortDirection;

/// Specifies the ordering of query results.
///
/// Multiple fields can be chained together for secondary, tertiary, etc. sorting.
///
/// # Example
///
/// ```
/// use dmp_table_lib::query::OrderBy;
///
/// // Single field ordering
/// let order = OrderBy::desc("modified");
///
/// // Multiple field ordering
/// let order = OrderBy::desc("modified")
///     .then_asc("title");
/// assert_eq!(order.to_string(), "modified desc,title asc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub(crate) fields: Vec<(String, SortDirection)>,
}

impl OrderBy {
    /// Creates an ascending order on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            fields: vec![(field.into(), SortDirection::Ascending)],
        }
    }

    /// Creates a descending order on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            fields: vec![(field.into(), SortDirection::Descending)],
        }
    }

    /// Adds a secondary ascending order on a field.
    pub fn then_asc(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), SortDirection::Ascending));
        self
    }

    /// Adds a secondary descending order on a field.
    pub fn then_desc(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), SortDirection::Descending));
        self
    }

    /// Builds an ordering from the active columns of a column set.
    ///
    /// Returns `None` when no column is active.
    pub fn from_columns(columns: &[Column]) -> Option<Self> {
        let fields: Vec<(String, SortDirection)> = columns
            .iter()
            .filter(|c| c.allows_sorting)
            .filter_map(|c| c.direction.map(|d| (c.id.clone(), d)))
            .collect();
        (!fields.is_empty()).then_some(Self { fields })
    }

    /// Returns the ordered fields with their directions.
    pub fn fields(&self) -> &[(String, SortDirection)] {
        &self.fields
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, direction)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{} {}", field, direction.keyword())?;
        }
        Ok(())
    }
}
