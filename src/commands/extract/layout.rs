pub const OFFICER_PAGE_HEADER: &str = "Citations - Violations By Sex and Race - By Officer";
pub const SUMMARY_PAGE_HEADER: &str = "Citations - Violations By Sex and Race - By Violation";
pub const PAGE_FOOTER: &str = "Citations - Violations By Sex and Race";

pub const OFFICER_NAME_DIRECTIVE: &str = r"23\.18 .* Td";
pub const OFFICER_NAME_PATTERN: &str = r"^[A-Z,\s]+$";

pub const TOTAL_ROW_MARKER: &str = "Total";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub summary_header: String,
    pub officer_header: String,
    pub footer: String,
    pub summary_header_tokens: usize,
    pub sanity_offset: usize,
    pub name_window_chars: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            summary_header: SUMMARY_PAGE_HEADER.to_string(),
            officer_header: OFFICER_PAGE_HEADER.to_string(),
            footer: PAGE_FOOTER.to_string(),
            summary_header_tokens: 24,
            sanity_offset: 16,
            name_window_chars: 1000,
        }
    }
}
