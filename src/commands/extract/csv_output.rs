use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{RowRecord, count_column_names};
use crate::util::ensure_parent_directory;

pub fn csv_header() -> Vec<String> {
    let mut header = vec![String::new(), "Name".to_string(), "Violation".to_string()];
    header.extend(count_column_names());
    header
}

pub fn write_rows<W: Write>(writer: W, rows: &[RowRecord]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(csv_header())
        .context("failed to write csv header")?;

    for (index, row) in rows.iter().enumerate() {
        let mut record = Vec::with_capacity(3 + row.counts.len());
        record.push(index.to_string());
        record.push(row.owner.clone());
        record.push(row.label.clone());
        record.extend(row.counts.iter().map(u64::to_string));
        csv_writer
            .write_record(&record)
            .with_context(|| format!("failed to write csv row {index}"))?;
    }

    csv_writer.flush().context("failed to flush csv output")?;
    Ok(())
}

pub fn write_rows_csv(path: &Path, rows: &[RowRecord]) -> Result<()> {
    ensure_parent_directory(path)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create csv file: {}", path.display()))?;
    write_rows(std::io::BufWriter::new(file), rows)
        .with_context(|| format!("failed to write csv file: {}", path.display()))
}
