use std::path::Path;

use rust_xlsxwriter::{Table as ExcelTable, Workbook};

use crate::pathfinder::tools::error::Result;
use crate::pathfinder::tools::report::TotalsTable;

/// Name of the sheet holding the totals.
pub const TOTALS_SHEET: &str = "Totals";

/// Writes the totals table to a single-sheet workbook at `path`.
pub fn write_totals_workbook(path: &Path, table: &TotalsTable) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(TOTALS_SHEET)?;

    for (col_idx, header) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, *header)?;
    }

    for (row_idx, (tag, total)) in table.rows.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        worksheet.write_string(row, 0, tag)?;
        worksheet.write_number(row, 1, *total)?;
    }

    let mut excel_table = ExcelTable::new();
    excel_table.set_autofilter(true);
    let col_end = (table.columns.len() as u16).saturating_sub(1);
    // an Excel table needs at least one data row below its header
    let row_end = table.rows.len().max(1) as u32;
    worksheet.add_table(0, 0, row_end, col_end, &excel_table)?;

    workbook.save(path)?;
    Ok(())
}
