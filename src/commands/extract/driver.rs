use std::fmt;

use tracing::{debug, info};

use super::error::Result;
use super::layout::Layout;
use super::officer_names::OfficerNameParser;
use super::officer_page::parse_officer_page;
use super::page_source::PageSource;
use super::page_type::{PageType, detect_page_type};
use super::sink::RowSink;
use super::summary_page::parse_summary_page;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum StopReason {
    #[default]
    EndOfDocument,
    UnknownPage { page: usize },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfDocument => write!(f, "end_of_document"),
            Self::UnknownPage { page } => write!(f, "unknown_page:{page}"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct DocumentStats {
    pub pages_visited: usize,
    pub summary_pages: usize,
    pub officer_pages: usize,
    pub officers_recovered: usize,
    pub officers_not_found: usize,
    pub rows_emitted: usize,
    pub totals_rows_skipped: usize,
    pub stop_reason: StopReason,
    pub warnings: Vec<String>,
}

pub struct PageDriver {
    layout: Layout,
    names: OfficerNameParser,
}

impl PageDriver {
    pub fn new(layout: Layout) -> anyhow::Result<Self> {
        let names = OfficerNameParser::new(layout.name_window_chars)?;
        Ok(Self { layout, names })
    }

    pub fn run(&self, source: &mut dyn PageSource, sink: &mut dyn RowSink) -> Result<DocumentStats> {
        let mut stats = DocumentStats::default();
        let mut page_number = 0_usize;

        while let Some(page) = source.paginate() {
            page_number += 1;
            let page_type = detect_page_type(&page.strings, &self.layout);

            match page_type {
                PageType::Unknown => {
                    stats.stop_reason = StopReason::UnknownPage { page: page_number };
                    info!(page = page_number, "unrecognized page header, stopping");
                    break;
                }
                PageType::Summary => {
                    let counts = parse_summary_page(&page.strings, &self.layout, sink)
                        .map_err(|error| error.on_page(page_number, page_type.as_str()))?;
                    stats.summary_pages += 1;
                    stats.rows_emitted += counts.rows_emitted;
                    stats.totals_rows_skipped += counts.totals_rows;
                }
                PageType::Officer => {
                    let counts = parse_officer_page(&page, &self.names, &self.layout, sink)
                        .map_err(|error| error.on_page(page_number, page_type.as_str()))?;
                    stats.officer_pages += 1;
                    stats.officers_recovered += counts.officers_recovered;
                    stats.officers_not_found += counts.officers_not_found.len();
                    stats.rows_emitted += counts.rows.rows_emitted;
                    stats.totals_rows_skipped += counts.rows.totals_rows;
                    for officer in counts.officers_not_found {
                        stats.warnings.push(format!(
                            "page {page_number}: no data block found for officer '{officer}'"
                        ));
                    }
                }
            }

            stats.pages_visited += 1;
            debug!(
                page = page_number,
                page_type = page_type.as_str(),
                rows = stats.rows_emitted,
                "page parsed"
            );
        }

        Ok(stats)
    }
}
