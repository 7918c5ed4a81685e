use tracing::debug;

use crate::model::AGGREGATE_OWNER;

use super::error::Result;
use super::layout::Layout;
use super::row_parse::parse_data_row;
use super::sink::RowSink;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageRowCounts {
    pub rows_emitted: usize,
    pub totals_rows: usize,
}

impl PageRowCounts {
    pub fn add(&mut self, other: &PageRowCounts) {
        self.rows_emitted += other.rows_emitted;
        self.totals_rows += other.totals_rows;
    }
}

pub fn parse_row_run(
    tokens: &[String],
    start: usize,
    owner: &str,
    layout: &Layout,
    sink: &mut dyn RowSink,
) -> Result<PageRowCounts> {
    let mut counts = PageRowCounts::default();
    let mut cursor = Some(start);

    while let Some(index) = cursor {
        let row = parse_data_row(tokens, index, owner, layout)?;
        if row.totals_marker.is_some() {
            counts.totals_rows += 1;
        }
        if let Some(record) = row.record {
            sink.append(record);
            counts.rows_emitted += 1;
        }
        cursor = row.next_start;
    }

    Ok(counts)
}

pub fn parse_summary_page(
    tokens: &[String],
    layout: &Layout,
    sink: &mut dyn RowSink,
) -> Result<PageRowCounts> {
    let body = tokens.get(layout.summary_header_tokens..).unwrap_or(&[]);
    let counts = parse_row_run(body, 0, AGGREGATE_OWNER, layout, sink)?;

    debug!(
        rows = counts.rows_emitted,
        totals = counts.totals_rows,
        "parsed summary page"
    );

    Ok(counts)
}
