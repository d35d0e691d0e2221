use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::record::Row;
use crate::table::VariantTable;

/// Writes `table` as comma-separated values: one header row with the column
/// names, then one row per record.
pub fn write_csv<P: AsRef<Path>, R: Row>(path: P, table: &VariantTable<R>) -> Result<()> {
    let path = path.as_ref();
    let writer = csv::Writer::from_path(path)?;
    write_records(writer, table)?;
    debug!(path = %path.display(), records = table.len(), "wrote CSV");
    Ok(())
}

/// Like [`write_csv`], for any destination.
pub fn write_csv_to<W: Write, R: Row>(writer: W, table: &VariantTable<R>) -> Result<()> {
    write_records(csv::Writer::from_writer(writer), table)
}

fn write_records<W: Write, R: Row>(
    mut writer: csv::Writer<W>,
    table: &VariantTable<R>,
) -> Result<()> {
    table.require_header()?;
    if !table.columns().is_empty() {
        writer.write_record(table.columns())?;
    }
    for record in table {
        writer.write_record(record.fields())?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
