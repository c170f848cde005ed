//! Row decoding errors

/// Errors raised while decoding a row from JSON.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// The row object has no `id` field.
    #[error("Row is missing an 'id' field")]
    MissingId,

    /// The row is not a JSON object.
    #[error("Row must be a JSON object, got {actual}")]
    NotAnObject { actual: &'static str },
}

impl RowError {
    /// Creates a new not-an-object error.
    pub fn not_an_object(actual: &'static str) -> Self {
        Self::NotAnObject { actual }
    }
}
