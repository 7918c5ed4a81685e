use anyhow::{Context, Result};
use rusqlite::{Connection, params_from_iter, types::Value};

use crate::model::{RowRecord, count_column_names};

pub fn configure_connection(connection: &Connection) -> Result<()> {
    connection
        .pragma_update(None, "journal_mode", "WAL")
        .context("failed to set journal_mode=WAL")?;
    connection
        .pragma_update(None, "synchronous", "NORMAL")
        .context("failed to set synchronous=NORMAL")?;
    Ok(())
}

pub fn sql_column_for(column: &str) -> Option<String> {
    count_column_names()
        .iter()
        .any(|name| name == column)
        .then(|| column.to_ascii_lowercase().replace([' ', '/'], "_"))
}

fn sql_count_columns() -> Vec<String> {
    count_column_names()
        .iter()
        .filter_map(|name| sql_column_for(name))
        .collect()
}

pub fn ensure_schema(connection: &Connection) -> Result<()> {
    let count_columns = sql_count_columns()
        .iter()
        .map(|column| format!("  {column} INTEGER NOT NULL"))
        .collect::<Vec<String>>()
        .join(",\n");

    connection
        .execute_batch(&format!(
            "
        CREATE TABLE IF NOT EXISTS extract_runs (
          run_id TEXT PRIMARY KEY,
          source TEXT NOT NULL,
          source_sha256 TEXT NOT NULL,
          started_at TEXT NOT NULL,
          row_count INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS citation_rows (
          run_id TEXT NOT NULL,
          source TEXT NOT NULL,
          row_idx INTEGER NOT NULL,
          owner TEXT NOT NULL,
          violation TEXT NOT NULL,
        {count_columns},
          PRIMARY KEY(run_id, row_idx),
          FOREIGN KEY(run_id) REFERENCES extract_runs(run_id)
        );

        CREATE INDEX IF NOT EXISTS idx_citation_rows_violation
          ON citation_rows(violation);
        "
        ))
        .context("failed to create extract schema")?;

    Ok(())
}

pub struct ExtractRunRecord<'a> {
    pub run_id: &'a str,
    pub source: &'a str,
    pub source_sha256: &'a str,
    pub started_at: &'a str,
}

pub fn insert_extract_run(
    connection: &mut Connection,
    run: &ExtractRunRecord<'_>,
    rows: &[RowRecord],
) -> Result<usize> {
    let count_columns = sql_count_columns();
    let placeholders = (1..=5 + count_columns.len())
        .map(|index| format!("?{index}"))
        .collect::<Vec<String>>()
        .join(", ");
    let insert_sql = format!(
        "INSERT INTO citation_rows(run_id, source, row_idx, owner, violation, {}) VALUES({placeholders})",
        count_columns.join(", ")
    );

    let tx = connection.transaction()?;

    tx.execute(
        "
        INSERT INTO extract_runs(run_id, source, source_sha256, started_at, row_count)
        VALUES(?1, ?2, ?3, ?4, ?5)
        ",
        rusqlite::params![
            run.run_id,
            run.source,
            run.source_sha256,
            run.started_at,
            rows.len() as i64
        ],
    )
    .with_context(|| format!("failed to record extract run {}", run.run_id))?;

    {
        let mut statement = tx
            .prepare(&insert_sql)
            .context("failed to prepare citation row insert")?;

        for (index, row) in rows.iter().enumerate() {
            let mut values = vec![
                Value::Text(run.run_id.to_string()),
                Value::Text(run.source.to_string()),
                Value::Integer(index as i64),
                Value::Text(row.owner.clone()),
                Value::Text(row.label.clone()),
            ];
            values.extend(row.counts.iter().map(|count| Value::Integer(*count as i64)));
            statement
                .execute(params_from_iter(values))
                .with_context(|| format!("failed to insert citation row {index}"))?;
        }
    }

    tx.commit()?;
    Ok(rows.len())
}
