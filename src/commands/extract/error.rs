pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("row '{label}' is misaligned: token {index} is a value past the end of the block; tokens: {window:?}")]
    StructuralDesync {
        index: usize,
        label: String,
        window: Vec<String>,
    },

    #[error("row '{label}' holds non-numeric value '{token}' at token {index}")]
    InvalidValue {
        index: usize,
        label: String,
        token: String,
    },

    #[error("row '{label}' ends after {found} values at token {index}")]
    TruncatedRow {
        index: usize,
        label: String,
        found: usize,
    },

    #[error("no data block found for officer '{officer}'")]
    OfficerDataNotFound { officer: String },

    #[error("extraction stopped on page {page} ({page_type})")]
    Page {
        page: usize,
        page_type: &'static str,
        #[source]
        source: Box<ExtractError>,
    },
}

impl ExtractError {
    pub fn on_page(self, page: usize, page_type: &'static str) -> Self {
        Self::Page {
            page,
            page_type,
            source: Box::new(self),
        }
    }
}
