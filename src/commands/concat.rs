use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::cli::ConcatArgs;
use crate::util::ensure_parent_directory;

pub fn run(args: ConcatArgs) -> Result<()> {
    if args.first_year > args.last_year {
        bail!(
            "first year {} is after last year {}",
            args.first_year,
            args.last_year
        );
    }

    let inputs = (args.first_year..=args.last_year)
        .map(|year| {
            (
                year,
                args.input_dir.join(format!("{year}{}", args.file_suffix)),
            )
        })
        .collect::<Vec<(u32, PathBuf)>>();

    let rows = concat_yearly_extracts(&inputs, &args.output)?;
    info!(
        path = %args.output.display(),
        files = inputs.len(),
        rows,
        "wrote concatenated extract"
    );

    Ok(())
}

pub fn concat_yearly_extracts(inputs: &[(u32, PathBuf)], output: &Path) -> Result<usize> {
    ensure_parent_directory(output)?;
    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("failed to create csv file: {}", output.display()))?;

    let mut columns: Option<Vec<String>> = None;
    let mut row_index = 0_usize;

    for (year, path) in inputs {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open yearly extract: {}", path.display()))?;
        let headers = reader
            .headers()
            .with_context(|| format!("failed to read csv header: {}", path.display()))?
            .clone();
        let indexed = headers.get(0).is_some_and(str::is_empty);
        let skip = usize::from(indexed);
        let file_columns = headers
            .iter()
            .skip(skip)
            .map(ToOwned::to_owned)
            .collect::<Vec<String>>();

        if columns.is_none() {
            let mut header = vec![String::new()];
            header.extend(file_columns.iter().cloned());
            header.push("Year".to_string());
            writer
                .write_record(&header)
                .context("failed to write csv header")?;
            columns = Some(file_columns);
        } else if columns.as_ref() != Some(&file_columns) {
            bail!(
                "columns of {} do not match the first yearly extract",
                path.display()
            );
        }

        let mut file_rows = 0_usize;
        for record in reader.records() {
            let record =
                record.with_context(|| format!("failed to read csv row: {}", path.display()))?;
            let mut fields = vec![row_index.to_string()];
            fields.extend(record.iter().skip(skip).map(ToOwned::to_owned));
            fields.push(year.to_string());
            writer
                .write_record(&fields)
                .with_context(|| format!("failed to write csv row {row_index}"))?;
            row_index += 1;
            file_rows += 1;
        }

        info!(year, path = %path.display(), rows = file_rows, "appended yearly extract");
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush csv file: {}", output.display()))?;
    Ok(row_index)
}
