use std::path::Path;

use csv::ReaderBuilder;

use crate::pathfinder::tools::error::Result;
use crate::pathfinder::tools::io::Table;

/// Reads a delimited text file. The first record is the header row.
///
/// Rows may have differing lengths; missing cells are handled by the record
/// conversion. An empty file yields an empty table.
pub fn read_table(path: &Path, delimiter: u8) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table { headers, rows })
}
