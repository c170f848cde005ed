//! Column set errors

/// Errors raised while building or updating a column set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnError {
    /// Two columns in the same set share an id.
    #[error("Duplicate column id '{id}'")]
    DuplicateId { id: String },

    /// The column id does not exist in the set.
    #[error("Unknown column '{id}'")]
    Unknown { id: String },

    /// The column exists but does not allow sorting.
    #[error("Column '{id}' does not allow sorting")]
    NotSortable { id: String },
}

impl ColumnError {
    /// Creates a new duplicate id error.
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// Creates a new unknown column error.
    pub fn unknown(id: impl Into<String>) -> Self {
        Self::Unknown { id: id.into() }
    }

    /// Creates a new not-sortable error.
    pub fn not_sortable(id: impl Into<String>) -> Self {
        Self::NotSortable { id: id.into() }
    }
}
