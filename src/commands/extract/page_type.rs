use super::layout::Layout;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PageType {
    Summary,
    Officer,
    Unknown,
}

impl PageType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Officer => "officer",
            Self::Unknown => "unknown",
        }
    }
}

pub fn detect_page_type(tokens: &[String], layout: &Layout) -> PageType {
    match tokens.first() {
        Some(header) if *header == layout.officer_header => PageType::Officer,
        Some(header) if *header == layout.summary_header => PageType::Summary,
        _ => PageType::Unknown,
    }
}
