//! Dynamic table rows

use std::collections::HashMap;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;

use super::Value;
use crate::error::RowError;

/// Name of the field that identifies a row.
pub const ID_FIELD: &str = "id";

/// Trait for rows that can be sorted and displayed by a table.
///
/// [`Row`] implements this for dynamic key-value rows. Typed rows can
/// implement it directly to avoid converting into maps.
///
/// # Example
///
/// ```
/// use dmp_table_lib::model::{TableRow, Value};
///
/// #[derive(Clone)]
/// struct Funding {
///     id: String,
///     funder: Value,
///     amount: Value,
/// }
///
/// impl TableRow for Funding {
///     fn key(&self) -> String {
///         self.id.clone()
///     }
///
///     fn cell(&self, column_id: &str) -> Option<&Value> {
///         match column_id {
///             "funder" => Some(&self.funder),
///             "amount" => Some(&self.amount),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// Returns the key identifying this row for rendering.
    fn key(&self) -> String;

    /// Returns the value for the given column, if the row has one.
    fn cell(&self, column_id: &str) -> Option<&Value>;
}

/// A dynamic table row.
///
/// Rows hold their cells as a `HashMap<String, Value>` keyed by column id.
/// The table never mutates a row; sorting only reorders them.
///
/// # Example
///
/// ```
/// use dmp_table_lib::model::{Row, TableRow, Value};
///
/// let row = Row::new(1)
///     .set("name", "Amy")
///     .set("created", "15/01/2024");
///
/// assert_eq!(row.key(), "1");
/// assert_eq!(row.get("name"), Some(&Value::from("Amy")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Creates a new row with the given id.
    pub fn new(id: impl Into<Value>) -> Self {
        let mut fields = HashMap::new();
        fields.insert(ID_FIELD.to_string(), id.into());
        Self { fields }
    }

    /// Sets a field value, returning the row.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Returns the row id.
    pub fn id(&self) -> &Value {
        // `new` and the deserializer both guarantee the id field.
        self.fields.get(ID_FIELD).unwrap_or(&Value::Null)
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }
}

impl TableRow for Row {
    fn key(&self) -> String {
        self.id().to_string()
    }

    fn cell(&self, column_id: &str) -> Option<&Value> {
        self.fields.get(column_id)
    }
}

impl TryFrom<serde_json::Value> for Row {
    type Error = RowError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let object = match value {
            serde_json::Value::Object(object) => object,
            serde_json::Value::Null => return Err(RowError::not_an_object("null")),
            serde_json::Value::Bool(_) => return Err(RowError::not_an_object("bool")),
            serde_json::Value::Number(_) => return Err(RowError::not_an_object("number")),
            serde_json::Value::String(_) => return Err(RowError::not_an_object("string")),
            serde_json::Value::Array(_) => return Err(RowError::not_an_object("array")),
        };
        if !object.contains_key(ID_FIELD) {
            return Err(RowError::MissingId);
        }
        let fields = object
            .into_iter()
            .map(|(key, value)| (key, Value::from(value)))
            .collect();
        Ok(Self { fields })
    }
}

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Row::try_from(value).map_err(serde::de::Error::custom)
    }
}
