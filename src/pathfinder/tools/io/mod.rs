//! Tabular input and output adapters.
//!
//! Readers load a whole sheet into a [`Table`] of strings; the conversion into
//! [`Record`]s is shared so CSV and Excel inputs validate identically.

pub mod csv_read;
pub mod excel_read;
pub mod excel_write;

use std::collections::BTreeMap;
use std::path::Path;

use crate::pathfinder::tools::aggregate::parse_tags;
use crate::pathfinder::tools::config::InputOptions;
use crate::pathfinder::tools::error::{Result, ToolError};
use crate::pathfinder::tools::model::Record;

/// A sheet loaded into memory. The header row is kept apart from the data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Returns `true` for extensions handled by the Excel reader.
pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "xlsx" | "xlsm"))
        .unwrap_or(false)
}

/// Loads the input as a table, picking the reader from the file extension.
pub fn read_table(path: &Path, options: &InputOptions) -> Result<Table> {
    if is_workbook(path) {
        excel_read::read_table(path, options.sheet.as_deref())
    } else {
        csv_read::read_table(path, options.delimiter)
    }
}

/// Converts table rows into records using the configured column names.
///
/// Rows with no content are skipped but still count towards the row numbers
/// used in diagnostics. Passthrough columns sharing a name with the tags or
/// value column are dropped.
pub fn records_from_table(table: &Table, options: &InputOptions) -> Result<Vec<Record>> {
    let tags_idx = column_index(&table.headers, &options.tags_column)?;
    let value_idx = column_index(&table.headers, &options.value_column)?;

    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, cells)| cells.iter().any(|cell| !cell.trim().is_empty()))
        .map(|(idx, cells)| {
            let row = idx + 1;
            let raw_tags = cells.get(tags_idx).map(String::as_str).unwrap_or_default();
            if raw_tags.is_empty() {
                return Err(ToolError::MalformedRow {
                    row,
                    reason: format!("column '{}' is empty", options.tags_column),
                });
            }

            let raw_value = cells.get(value_idx).map(String::as_str).unwrap_or_default();
            let value = parse_value(raw_value).ok_or_else(|| ToolError::MalformedRow {
                row,
                reason: format!(
                    "column '{}' holds non-numeric value '{raw_value}'",
                    options.value_column
                ),
            })?;

            let extra: BTreeMap<String, String> = table
                .headers
                .iter()
                .enumerate()
                .filter(|(_, header)| {
                    !header.is_empty()
                        && **header != options.tags_column
                        && **header != options.value_column
                })
                .map(|(col, header)| (header.clone(), cells.get(col).cloned().unwrap_or_default()))
                .collect();

            Ok(Record {
                row,
                tags: parse_tags(raw_tags),
                value,
                extra,
            })
        })
        .collect()
}

fn column_index(headers: &[String], column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| ToolError::MissingColumn {
            column: column.to_string(),
        })
}

fn parse_value(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
