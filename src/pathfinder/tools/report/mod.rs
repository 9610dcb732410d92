//! Human-readable and JSON renderings of records and totals.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::pathfinder::tools::config::InputOptions;
use crate::pathfinder::tools::error::Result;
use crate::pathfinder::tools::model::{Record, Totals};

/// Header of the character column in every totals rendering.
pub const CHARACTER_COLUMN: &str = "Character";
/// Header of the total column in every totals rendering.
pub const TOTAL_COLUMN: &str = "Total";

/// Totals laid out as an ordered two-column table, one row per character.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalsTable {
    pub columns: [&'static str; 2],
    pub rows: Vec<(String, f64)>,
}

impl TotalsTable {
    pub fn from_totals(totals: &Totals) -> Self {
        Self {
            columns: [CHARACTER_COLUMN, TOTAL_COLUMN],
            rows: totals
                .iter()
                .map(|(tag, total)| (tag.clone(), *total))
                .collect(),
        }
    }
}

impl fmt::Display for TotalsTable {
    /// Left-aligned names, right-aligned totals, two spaces between columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let totals: Vec<String> = self.rows.iter().map(|(_, total)| format_total(*total)).collect();

        let name_width = self
            .rows
            .iter()
            .map(|(tag, _)| tag.chars().count())
            .chain(std::iter::once(self.columns[0].len()))
            .max()
            .unwrap_or_default();
        let total_width = totals
            .iter()
            .map(String::len)
            .chain(std::iter::once(self.columns[1].len()))
            .max()
            .unwrap_or_default();

        writeln!(
            f,
            "{:<name_width$}  {:>total_width$}",
            self.columns[0], self.columns[1]
        )?;
        for ((tag, _), total) in self.rows.iter().zip(&totals) {
            writeln!(f, "{tag:<name_width$}  {total:>total_width$}")?;
        }
        Ok(())
    }
}

/// Formats a total, dropping the fractional part of whole numbers.
pub fn format_total(total: f64) -> String {
    total.to_string()
}

/// A record keyed by the column names it was read from: tags first, then the
/// value, then the passthrough columns.
pub struct RecordLine<'a> {
    pub record: &'a Record,
    pub tags_column: &'a str,
    pub value_column: &'a str,
}

impl Serialize for RecordLine<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.record.extra.len()))?;
        map.serialize_entry(self.tags_column, &self.record.tags)?;
        map.serialize_entry(self.value_column, &self.record.value)?;
        for (column, cell) in &self.record.extra {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}

/// Renders one record as a single JSON line.
pub fn record_line(record: &Record, options: &InputOptions) -> Result<String> {
    let line = RecordLine {
        record,
        tags_column: &options.tags_column,
        value_column: &options.value_column,
    };
    Ok(serde_json::to_string(&line)?)
}

/// Renders the totals as a pretty-printed JSON object keyed by character.
pub fn totals_json(totals: &Totals) -> Result<String> {
    Ok(serde_json::to_string_pretty(totals)?)
}
