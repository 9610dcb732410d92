use std::io::Write;
use std::path::Path;

use crate::pathfinder::tools::aggregate::aggregate;
use crate::pathfinder::tools::config::{InputOptions, OutputFormat, TallyConfig};
use crate::pathfinder::tools::error::{Result, ToolError};
use crate::pathfinder::tools::io::{self, excel_write};
use crate::pathfinder::tools::model::{Aggregation, Record};
use crate::pathfinder::tools::report::{self, TotalsTable};
use tracing::{debug, info, instrument};

/// Reads the experience log at `input` into records.
#[instrument(level = "debug", skip_all, fields(input = %input.display()))]
pub fn load_records(input: &Path, options: &InputOptions) -> Result<Vec<Record>> {
    if !input.exists() {
        return Err(ToolError::InputNotFound(input.to_path_buf()));
    }

    let table = io::read_table(input, options)?;
    debug!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "loaded input table"
    );
    io::records_from_table(&table, options)
}

/// Totals the experience log at `input` and writes the report to `out`.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), sentinel = %config.sentinel)
)]
pub fn calculate_experience(
    input: &Path,
    config: &TallyConfig,
    out: &mut dyn Write,
) -> Result<Aggregation> {
    let records = load_records(input, &config.input)?;
    info!(record_count = records.len(), "parsed experience records");

    let aggregation = aggregate(records, &config.sentinel)?;
    info!(
        character_count = aggregation.totals.len(),
        "computed experience totals"
    );

    write_report(&aggregation, config, out)?;

    if let Some(path) = &config.workbook {
        excel_write::write_totals_workbook(path, &TotalsTable::from_totals(&aggregation.totals))?;
        info!(output = %path.display(), "wrote totals workbook");
    }

    Ok(aggregation)
}

#[instrument(level = "debug", skip_all, fields(format = ?config.format))]
fn write_report(aggregation: &Aggregation, config: &TallyConfig, out: &mut dyn Write) -> Result<()> {
    if config.show_rows {
        for record in &aggregation.records {
            writeln!(out, "{}", report::record_line(record, &config.input)?)?;
        }
    }

    match config.format {
        OutputFormat::Table => write!(out, "{}", TotalsTable::from_totals(&aggregation.totals))?,
        OutputFormat::Json => writeln!(out, "{}", report::totals_json(&aggregation.totals)?)?,
    }
    Ok(())
}
