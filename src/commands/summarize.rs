use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use rusqlite::{Connection, OpenFlags, params};
use serde::Serialize;
use tracing::info;

use crate::cli::{SummarizeArgs, SummaryScope};
use crate::commands::extract::sql_column_for;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationTotal {
    pub violation: String,
    pub total: i64,
}

#[derive(Debug, Serialize)]
struct SummaryResponse<'a> {
    column: &'a str,
    scope: &'a str,
    source: Option<&'a str>,
    violations: &'a [ViolationTotal],
}

pub fn run(args: SummarizeArgs) -> Result<()> {
    let connection = Connection::open_with_flags(&args.db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .with_context(|| format!("failed to open {}", args.db_path.display()))?;

    let totals = summarize_by_violation(
        &connection,
        &args.column,
        args.scope,
        args.source.as_deref(),
    )?;
    info!(
        column = %args.column,
        scope = args.scope.as_str(),
        violations = totals.len(),
        "summarized citation rows"
    );

    let mut output = io::BufWriter::new(io::stdout().lock());
    if args.json {
        let response = SummaryResponse {
            column: &args.column,
            scope: args.scope.as_str(),
            source: args.source.as_deref(),
            violations: &totals,
        };
        serde_json::to_writer_pretty(&mut output, &response)
            .context("failed to serialize summary json output")?;
        writeln!(output)?;
    } else {
        writeln!(output, "Violation\t{}", args.column)?;
        for entry in &totals {
            writeln!(output, "{}\t{}", entry.violation, entry.total)?;
        }
    }
    output.flush()?;

    Ok(())
}

pub fn summarize_by_violation(
    connection: &Connection,
    column: &str,
    scope: SummaryScope,
    source: Option<&str>,
) -> Result<Vec<ViolationTotal>> {
    let Some(sql_column) = sql_column_for(column) else {
        bail!("unknown count column '{column}'; expected '<Ethnicity>/<Gender>'");
    };
    let owner_filter = match scope {
        SummaryScope::Officers => "owner <> '*'",
        SummaryScope::Aggregate => "owner = '*'",
        SummaryScope::All => "1 = 1",
    };

    let sql = format!(
        "
        SELECT violation, SUM({sql_column})
        FROM citation_rows
        WHERE {owner_filter} AND (?1 IS NULL OR source = ?1)
        GROUP BY violation
        ORDER BY violation
        "
    );
    let mut statement = connection
        .prepare(&sql)
        .context("failed to prepare violation summary query")?;
    let rows = statement
        .query_map(params![source], |row| {
            Ok(ViolationTotal {
                violation: row.get(0)?,
                total: row.get(1)?,
            })
        })
        .context("failed to run violation summary query")?;

    let mut totals = Vec::new();
    for row in rows {
        totals.push(row.context("failed to read violation summary row")?);
    }
    Ok(totals)
}
