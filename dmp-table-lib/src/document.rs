//! Serialized table documents

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::DocumentError;
use crate::model::ColumnSet;
use crate::model::Row;

/// The JSON form of a table's initial props.
///
/// ```json
/// {
///   "label": "Research outputs",
///   "className": "outputs-table",
///   "columnData": [{"id": "title", "name": "Title", "isRowHeader": true, "allowsSorting": true}],
///   "rowData": [{"id": 1, "title": "Soil survey"}]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDocument {
    /// Accessible label for the table.
    pub label: String,
    /// Optional styling hook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Initial column set.
    pub column_data: ColumnSet,
    /// Initial row set.
    #[serde(default)]
    pub row_data: Vec<Row>,
}

impl TableDocument {
    /// Parses a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| DocumentError::io(path, e))?;
        log::debug!("Loaded table document from {}", path.display());
        Self::from_json(&json)
    }
}
