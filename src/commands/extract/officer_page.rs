use tracing::{debug, warn};

use crate::model::RenderedPage;

use super::error::{ExtractError, Result};
use super::layout::Layout;
use super::officer_names::{OfficerName, OfficerNameParser};
use super::sink::RowSink;
use super::summary_page::{PageRowCounts, parse_row_run};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OfficerPageCounts {
    pub rows: PageRowCounts,
    pub officers_recovered: usize,
    pub officers_not_found: Vec<String>,
}

pub fn find_officer_data_index(
    tokens: &[String],
    start: usize,
    name: &OfficerName,
) -> Result<usize> {
    let width = name.parts.len();
    let not_found = || ExtractError::OfficerDataNotFound {
        officer: name.owner(),
    };
    if width == 0 {
        return Err(not_found());
    }

    tokens
        .get(start..)
        .and_then(|rest| {
            rest.windows(width)
                .position(|window| window.iter().zip(&name.parts).all(|(a, b)| a == b))
        })
        .map(|offset| start + offset + width)
        .ok_or_else(not_found)
}

pub fn parse_officer_page(
    page: &RenderedPage,
    names: &OfficerNameParser,
    layout: &Layout,
    sink: &mut dyn RowSink,
) -> Result<OfficerPageCounts> {
    let officers = names.parse(&page.markdown);
    let mut counts = OfficerPageCounts {
        officers_recovered: officers.len(),
        ..OfficerPageCounts::default()
    };

    for officer in &officers {
        let owner = officer.owner();
        let data_start = match find_officer_data_index(&page.strings, 0, officer) {
            Ok(index) => index,
            Err(ExtractError::OfficerDataNotFound { officer: missing }) => {
                warn!(officer = %missing, "officer name not found in page strings");
                counts.officers_not_found.push(missing);
                continue;
            }
            Err(error) => return Err(error),
        };

        let rows = parse_row_run(&page.strings, data_start, &owner, layout, sink)?;
        debug!(
            officer = %owner,
            data_start,
            rows = rows.rows_emitted,
            "parsed officer rows"
        );
        counts.rows.add(&rows);
    }

    Ok(counts)
}
