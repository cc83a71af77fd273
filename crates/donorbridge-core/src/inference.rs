//! Schema inference over arbitrary tabular input.
//!
//! Produces a structural summary plus a redacted sample safe to hand to
//! downstream consumers (display, LLM context). Type inference always runs
//! over the full column; the sample is display-only and never feeds back
//! into inference.

use schemars::JsonSchema;
use schemars::schema::Schema;
use serde::{Serialize, Serializer};

use crate::pii::{PiiPatterns, REDACTION_MARKER};
use crate::table::{CellValue, DataTable};

/// Rows included in the redacted sample when the caller does not choose.
pub const DEFAULT_SAMPLE_ROWS: usize = 5;

/// Structural metadata for a single column.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ColumnSummary {
    pub name: String,
    pub declared_type: String,
    pub non_null_count: usize,
}

/// Row/column counts of the input table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct TableShape {
    pub rows: usize,
    pub cols: usize,
}

/// A sampled cell after redaction. Missing values render as an explicit
/// null and take precedence over redaction.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleValue {
    Null,
    Redacted,
    Value(CellValue),
}

impl Serialize for SampleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SampleValue::Null => serializer.serialize_unit(),
            SampleValue::Redacted => serializer.serialize_str(REDACTION_MARKER),
            SampleValue::Value(value) => value.serialize(serializer),
        }
    }
}

impl JsonSchema for SampleValue {
    fn schema_name() -> String {
        "SampleValue".to_string()
    }

    fn json_schema(_generator: &mut schemars::r#gen::SchemaGenerator) -> Schema {
        Schema::Bool(true)
    }
}

impl std::fmt::Display for SampleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleValue::Null => f.write_str("null"),
            SampleValue::Redacted => f.write_str(REDACTION_MARKER),
            SampleValue::Value(value) => write!(f, "{value}"),
        }
    }
}

/// Derived, read-only structural view of an input table.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct InferredSchema {
    /// One summary per input column, in column order.
    pub columns: Vec<ColumnSummary>,
    pub shape: TableShape,
    /// First rows of the input with sensitive values redacted; each row's
    /// cells align with `columns`.
    pub sample: Vec<Vec<SampleValue>>,
}

/// Infer schema and a redacted sample using the default PII patterns and
/// sample size.
pub fn infer_schema(table: &DataTable) -> InferredSchema {
    infer_schema_with(table, DEFAULT_SAMPLE_ROWS, &PiiPatterns::default())
}

/// Infer schema and a redacted sample.
///
/// The sample holds the first `min(sample_rows, rows)` rows verbatim except
/// that missing values become explicit nulls and string-like or
/// integer-like values in sensitive columns are replaced by the redaction
/// marker. Redaction is decided by column name only; value content is
/// never inspected.
pub fn infer_schema_with(
    table: &DataTable,
    sample_rows: usize,
    patterns: &PiiPatterns,
) -> InferredSchema {
    let shape = TableShape {
        rows: table.row_count(),
        cols: table.column_count(),
    };

    let mut columns = Vec::with_capacity(table.column_count());
    for (index, name) in table.columns().iter().enumerate() {
        let mut non_null_count = 0;
        let mut declared_type: Option<&'static str> = None;
        for row in table.rows() {
            let cell = &row[index];
            let Some(kind) = cell.kind() else {
                continue;
            };
            non_null_count += 1;
            declared_type = Some(merge_kinds(declared_type, kind));
        }
        columns.push(ColumnSummary {
            name: name.clone(),
            declared_type: declared_type.unwrap_or("unknown").to_string(),
            non_null_count,
        });
    }

    let sensitive: Vec<bool> = table
        .columns()
        .iter()
        .map(|name| patterns.matches(name))
        .collect();

    let sample = table
        .rows()
        .iter()
        .take(sample_rows)
        .map(|row| {
            row.iter()
                .zip(&sensitive)
                .map(|(cell, sensitive)| redact_cell(cell, *sensitive))
                .collect()
        })
        .collect();

    InferredSchema {
        columns,
        shape,
        sample,
    }
}

fn merge_kinds(current: Option<&'static str>, next: &'static str) -> &'static str {
    match current {
        None => next,
        Some(kind) if kind == next => kind,
        Some("integer") if next == "float" => "float",
        Some("float") if next == "integer" => "float",
        Some(_) => "mixed",
    }
}

fn redact_cell(cell: &CellValue, sensitive: bool) -> SampleValue {
    if cell.is_null() {
        return SampleValue::Null;
    }
    if sensitive && matches!(cell, CellValue::Text(_) | CellValue::Int(_)) {
        return SampleValue::Redacted;
    }
    SampleValue::Value(cell.clone())
}
