use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug_span;

use es_core::analytics::{ExportRow, EXPORT_HEADER};

/// Writes the header followed by one line per row. The header is written
/// even when `rows` is empty.
pub fn write_export_csv<W: Write>(writer: W, rows: &[ExportRow]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(EXPORT_HEADER)
        .context("Failed to write CSV header")?;
    for row in rows {
        csv_writer
            .serialize(row)
            .with_context(|| format!("Failed to write CSV row for scan {}", row.id))?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the export into it.
pub fn write_export_csv_file(path: &Path, rows: &[ExportRow]) -> Result<()> {
    let span = debug_span!("infra.fs.write_export_csv", path = %path.display(), rows = rows.len());
    let _enter = span.enter();

    let file = File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    write_export_csv(file, rows)
}
