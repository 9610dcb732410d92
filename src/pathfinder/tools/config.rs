//! Runtime settings consumed by the library.
//!
//! The binary builds a [`TallyConfig`] from its command line; tests and other
//! callers can start from [`TallyConfig::default`] and override fields.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::pathfinder::tools::aggregate::DEFAULT_SENTINEL;

/// Header of the column holding the comma-delimited character list.
pub const DEFAULT_TAGS_COLUMN: &str = "Characters";
/// Header of the column holding the experience value.
pub const DEFAULT_VALUE_COLUMN: &str = "Total";

/// How the totals are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned two-column text table.
    #[default]
    Table,
    /// JSON object keyed by character.
    Json,
}

/// Where and how to find the two required columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputOptions {
    pub tags_column: String,
    pub value_column: String,
    /// Field delimiter for delimited text input.
    pub delimiter: u8,
    /// Worksheet to read from Excel input; the first sheet when unset.
    pub sheet: Option<String>,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            tags_column: DEFAULT_TAGS_COLUMN.to_string(),
            value_column: DEFAULT_VALUE_COLUMN.to_string(),
            delimiter: b',',
            sheet: None,
        }
    }
}

/// Full set of settings for one tally run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyConfig {
    /// Keyword marking global experience rows.
    pub sentinel: String,
    pub input: InputOptions,
    pub format: OutputFormat,
    /// Print each parsed row before the totals.
    pub show_rows: bool,
    /// Optional workbook receiving a copy of the totals.
    pub workbook: Option<PathBuf>,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            input: InputOptions::default(),
            format: OutputFormat::default(),
            show_rows: true,
            workbook: None,
        }
    }
}
