use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use tracing::{info, warn};

use crate::cli::StatusArgs;

pub fn run(args: StatusArgs) -> Result<()> {
    info!(db_path = %args.db_path.display(), "status requested");

    if !args.db_path.exists() {
        warn!(path = %args.db_path.display(), "database file missing");
        return Ok(());
    }

    let conn = Connection::open_with_flags(&args.db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .with_context(|| format!("failed to open {}", args.db_path.display()))?;

    let runs = query_count(&conn, "SELECT COUNT(*) FROM extract_runs").unwrap_or(0);
    let rows = query_count(&conn, "SELECT COUNT(*) FROM citation_rows").unwrap_or(0);
    let aggregate_rows =
        query_count(&conn, "SELECT COUNT(*) FROM citation_rows WHERE owner = '*'").unwrap_or(0);
    let officers = query_count(
        &conn,
        "SELECT COUNT(DISTINCT owner) FROM citation_rows WHERE owner <> '*'",
    )
    .unwrap_or(0);

    info!(
        path = %args.db_path.display(),
        runs,
        rows,
        aggregate_rows,
        officer_rows = rows - aggregate_rows,
        officers,
        "database status"
    );

    let latest = conn
        .query_row(
            "SELECT run_id, source, started_at, row_count FROM extract_runs
             ORDER BY started_at DESC LIMIT 1",
            [],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            },
        )
        .optional()
        .unwrap_or(None);

    match latest {
        Some((run_id, source, started_at, row_count)) => info!(
            run_id = %run_id,
            source = %source,
            started_at = %started_at,
            rows = row_count,
            "latest extract run"
        ),
        None => warn!("no extract runs recorded"),
    }

    Ok(())
}

fn query_count(conn: &Connection, sql: &str) -> Result<i64> {
    let count = conn.query_row(sql, [], |row| row.get(0))?;
    Ok(count)
}
