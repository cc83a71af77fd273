use chrono::NaiveDate;
use schemars::JsonSchema;
use schemars::schema::Schema;
use serde::ser::{Serialize, Serializer};

use crate::error::{Error, Result};

/// A single scalar cell of a tabular input.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Scalar kind name used by type inference. `Null` carries no kind.
    pub(crate) fn kind(&self) -> Option<&'static str> {
        match self {
            CellValue::Null => None,
            CellValue::Bool(_) => Some("boolean"),
            CellValue::Int(_) => Some("integer"),
            CellValue::Float(_) => Some("float"),
            CellValue::Text(_) => Some("text"),
            CellValue::Date(_) => Some("date"),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => f.write_str("null"),
            CellValue::Bool(value) => write!(f, "{value}"),
            CellValue::Int(value) => write!(f, "{value}"),
            CellValue::Float(value) => write!(f, "{value}"),
            CellValue::Text(value) => write!(f, "{value}"),
            CellValue::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CellValue::Null => serializer.serialize_unit(),
            CellValue::Bool(value) => serializer.serialize_bool(*value),
            CellValue::Int(value) => serializer.serialize_i64(*value),
            CellValue::Float(value) => serializer.serialize_f64(*value),
            CellValue::Text(value) => serializer.serialize_str(value),
            CellValue::Date(value) => {
                serializer.serialize_str(&value.format("%Y-%m-%d").to_string())
            }
        }
    }
}

impl JsonSchema for CellValue {
    fn schema_name() -> String {
        "CellValue".to_string()
    }

    fn json_schema(_generator: &mut schemars::r#gen::SchemaGenerator) -> Schema {
        // Heterogeneous scalar; the contract intentionally leaves it open.
        Schema::Bool(true)
    }
}

/// An ordered-column, row-major tabular input for schema inference.
///
/// Rows must all match the column count; ragged input is rejected at
/// construction so inference never has to reconcile shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::InvalidTable(format!(
                    "row {} has {} cells, expected {}",
                    index,
                    row.len(),
                    columns.len()
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_rows() {
        let result = DataTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![CellValue::Int(1)]],
        );
        assert!(matches!(result, Err(Error::InvalidTable(_))));
    }

    #[test]
    fn accepts_empty_table() {
        let table = DataTable::new(vec!["a".to_string()], Vec::new()).expect("valid table");
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 1);
    }
}
