use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::Connection;
use tracing::{info, warn};

use crate::cli::ExtractArgs;
use crate::model::{ExtractCounts, ExtractLayoutManifest, ExtractPaths, ExtractRunManifest};
use crate::util::{now_utc_string, path_with_suffix, sha256_file, utc_compact_string, write_json_pretty};

use super::csv_output::write_rows_csv;
use super::driver::PageDriver;
use super::layout::Layout;
use super::page_source::PageDump;
use super::sink::RowCollector;
use super::store::{ExtractRunRecord, configure_connection, ensure_schema, insert_extract_run};

pub fn run(args: ExtractArgs) -> Result<()> {
    let started_ts = Utc::now();
    let started_at = now_utc_string();

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| path_with_suffix(&args.pages, "_out.csv"));
    let manifest_path = args
        .manifest_path
        .clone()
        .unwrap_or_else(|| path_with_suffix(&output_path, ".manifest.json"));

    let source_sha256 = sha256_file(&args.pages)?;
    let run_id = format!(
        "extract-{}-{}",
        utc_compact_string(started_ts),
        &source_sha256[..12]
    );
    info!(pages = %args.pages.display(), run_id = %run_id, "starting extract");

    let mut source = PageDump::open(&args.pages)?;
    info!(page_count = source.page_count(), "loaded page dump");

    let layout = layout_from_args(&args);
    let driver = PageDriver::new(layout.clone())?;
    let mut collector = RowCollector::default();
    let stats = driver
        .run(&mut source, &mut collector)
        .with_context(|| format!("failed to extract rows from {}", args.pages.display()))?;

    for warning in &stats.warnings {
        warn!(warning = %warning, "extract warning");
    }

    let source_name = args.pages.display().to_string();
    if let Some(db_path) = &args.db_path {
        let mut connection = Connection::open(db_path)
            .with_context(|| format!("failed to open {}", db_path.display()))?;
        configure_connection(&connection)?;
        ensure_schema(&connection)?;
        let inserted = insert_extract_run(
            &mut connection,
            &ExtractRunRecord {
                run_id: &run_id,
                source: &source_name,
                source_sha256: &source_sha256,
                started_at: &started_at,
            },
            collector.rows(),
        )?;
        info!(path = %db_path.display(), rows = inserted, "stored rows in database");
    }

    write_rows_csv(&output_path, collector.rows())?;
    info!(path = %output_path.display(), rows = collector.len(), "wrote csv output");

    let aggregate_rows = collector
        .rows()
        .iter()
        .filter(|row| row.is_aggregate())
        .count();

    let manifest = ExtractRunManifest {
        manifest_version: 1,
        run_id,
        status: "completed".to_string(),
        started_at,
        updated_at: now_utc_string(),
        source_sha256,
        stop_reason: stats.stop_reason.to_string(),
        paths: ExtractPaths {
            pages_path: source_name,
            output_path: output_path.display().to_string(),
            db_path: args.db_path.as_ref().map(|path| path.display().to_string()),
        },
        layout: ExtractLayoutManifest {
            summary_header_tokens: layout.summary_header_tokens,
            sanity_offset: layout.sanity_offset,
            name_window_chars: layout.name_window_chars,
        },
        counts: ExtractCounts {
            pages_visited: stats.pages_visited,
            summary_pages: stats.summary_pages,
            officer_pages: stats.officer_pages,
            officers_recovered: stats.officers_recovered,
            officers_not_found: stats.officers_not_found,
            rows_emitted: stats.rows_emitted,
            aggregate_rows,
            officer_rows: collector.len() - aggregate_rows,
            totals_rows_skipped: stats.totals_rows_skipped,
        },
        warnings: stats.warnings,
    };

    write_json_pretty(&manifest_path, &manifest)?;
    info!(path = %manifest_path.display(), "wrote extract run manifest");
    info!(
        pages = manifest.counts.pages_visited,
        rows = manifest.counts.rows_emitted,
        stop_reason = %manifest.stop_reason,
        "extract completed"
    );

    Ok(())
}

fn layout_from_args(args: &ExtractArgs) -> Layout {
    Layout {
        summary_header_tokens: args.summary_header_tokens,
        sanity_offset: args.sanity_offset,
        name_window_chars: args.name_window_chars,
        ..Layout::default()
    }
}
