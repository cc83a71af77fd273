//! Text rendering of an inferred schema for LLM/system-prompt context.
//!
//! The section order (header, columns, samples) is a structural contract
//! with the prompt-assembly collaborator; changing it breaks downstream
//! parsing.

use std::fmt::Write;

use crate::inference::InferredSchema;

/// Render an inferred schema as prompt-ready text.
pub fn format_schema_for_prompt(schema: &InferredSchema) -> String {
    let mut out = String::new();
    out.push_str("## Ingested data schema\n");
    let _ = writeln!(
        out,
        "- Rows: {}, Columns: {}",
        schema.shape.rows, schema.shape.cols
    );
    out.push('\n');
    out.push_str("### Columns\n");
    for column in &schema.columns {
        let _ = writeln!(
            out,
            "- {}: {} (non-null: {})",
            column.name, column.declared_type, column.non_null_count
        );
    }
    out.push('\n');
    out.push_str("### Sample rows (PII redacted)\n");
    for (index, row) in schema.sample.iter().enumerate() {
        let _ = write!(out, "Row {}: {{", index + 1);
        for (cell_index, (column, value)) in schema.columns.iter().zip(row).enumerate() {
            if cell_index > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}: {}", column.name, value);
        }
        out.push_str("}\n");
    }
    out
}
