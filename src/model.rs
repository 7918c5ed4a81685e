use serde::{Deserialize, Serialize};

pub const ETHNICITIES: [&str; 5] = ["Asian", "Black", "White", "Indigenous American", "Unknown"];
pub const GENDERS: [&str; 3] = ["F", "M", "U"];
pub const COUNT_COLUMNS: usize = ETHNICITIES.len() * GENDERS.len();

pub const AGGREGATE_OWNER: &str = "*";

pub fn count_column_names() -> Vec<String> {
    ETHNICITIES
        .iter()
        .flat_map(|ethnicity| {
            GENDERS
                .iter()
                .map(move |gender| format!("{ethnicity}/{gender}"))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRecord {
    pub owner: String,
    pub label: String,
    pub counts: [u64; COUNT_COLUMNS],
}

impl RowRecord {
    pub fn is_aggregate(&self) -> bool {
        self.owner == AGGREGATE_OWNER
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderedPage {
    #[serde(default)]
    pub strings: Vec<String>,
    #[serde(default)]
    pub markdown: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PageDumpFile {
    Document { pages: Vec<RenderedPage> },
    Pages(Vec<RenderedPage>),
}

impl PageDumpFile {
    pub fn into_pages(self) -> Vec<RenderedPage> {
        match self {
            Self::Document { pages } => pages,
            Self::Pages(pages) => pages,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractPaths {
    pub pages_path: String,
    pub output_path: String,
    pub db_path: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractCounts {
    pub pages_visited: usize,
    pub summary_pages: usize,
    pub officer_pages: usize,
    pub officers_recovered: usize,
    pub officers_not_found: usize,
    pub rows_emitted: usize,
    pub aggregate_rows: usize,
    pub officer_rows: usize,
    pub totals_rows_skipped: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractLayoutManifest {
    pub summary_header_tokens: usize,
    pub sanity_offset: usize,
    pub name_window_chars: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractRunManifest {
    pub manifest_version: u32,
    pub run_id: String,
    pub status: String,
    pub started_at: String,
    pub updated_at: String,
    pub source_sha256: String,
    pub stop_reason: String,
    pub paths: ExtractPaths,
    pub layout: ExtractLayoutManifest,
    pub counts: ExtractCounts,
    pub warnings: Vec<String>,
}
