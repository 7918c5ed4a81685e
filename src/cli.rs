use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "citation-tables",
    version,
    about = "Extract citation counts by sex and race from rendered report pages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Extract(ExtractArgs),
    Concat(ConcatArgs),
    Summarize(SummarizeArgs),
    Status(StatusArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(long)]
    pub pages: PathBuf,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub db_path: Option<PathBuf>,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    #[arg(long, default_value_t = 24)]
    pub summary_header_tokens: usize,

    #[arg(long, default_value_t = 16)]
    pub sanity_offset: usize,

    #[arg(long, default_value_t = 1000)]
    pub name_window_chars: usize,
}

#[derive(Args, Debug, Clone)]
pub struct ConcatArgs {
    #[arg(long, default_value = ".")]
    pub input_dir: PathBuf,

    #[arg(long, default_value_t = 2010)]
    pub first_year: u32,

    #[arg(long, default_value_t = 2019)]
    pub last_year: u32,

    #[arg(long, default_value = ".pdf_out.csv")]
    pub file_suffix: String,

    #[arg(long, default_value = "all.csv")]
    pub output: PathBuf,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum SummaryScope {
    Officers,
    Aggregate,
    All,
}

impl SummaryScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Officers => "officers",
            Self::Aggregate => "aggregate",
            Self::All => "all",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SummarizeArgs {
    #[arg(long)]
    pub db_path: PathBuf,

    #[arg(long, default_value = "Black/F")]
    pub column: String,

    #[arg(long, value_enum, default_value_t = SummaryScope::Officers)]
    pub scope: SummaryScope,

    #[arg(long)]
    pub source: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[arg(long)]
    pub db_path: PathBuf,
}
