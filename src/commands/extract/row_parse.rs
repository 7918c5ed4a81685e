use tracing::debug;

use crate::model::{COUNT_COLUMNS, RowRecord};

use super::error::{ExtractError, Result};
use super::layout::{Layout, TOTAL_ROW_MARKER};
use super::tokens::{is_numeric_token, numeric_value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub next_start: Option<usize>,
    pub totals_marker: Option<usize>,
    pub label: String,
    pub record: Option<RowRecord>,
}

impl ParsedRow {
    fn page_end(label: String) -> Self {
        Self {
            next_start: None,
            totals_marker: None,
            label,
            record: None,
        }
    }
}

pub fn parse_data_row(
    tokens: &[String],
    start: usize,
    owner: &str,
    layout: &Layout,
) -> Result<ParsedRow> {
    let mut index = start;
    let mut label_parts = Vec::<&str>::new();

    loop {
        let Some(token) = tokens.get(index) else {
            debug!(start, "token stream ended before a value block");
            return Ok(ParsedRow::page_end(label_parts.join(" ")));
        };
        if is_numeric_token(token) {
            break;
        }
        label_parts.push(token);
        index += 1;
    }
    let label = label_parts.join(" ");

    // A label fragment read as a value shifts the 15-value window.
    let lookahead = index.saturating_add(layout.sanity_offset);
    if tokens.get(lookahead).is_some_and(|token| is_numeric_token(token)) {
        return Err(ExtractError::StructuralDesync {
            index: lookahead,
            label,
            window: tokens[start..=lookahead].to_vec(),
        });
    }

    if label.contains(TOTAL_ROW_MARKER) {
        return Ok(ParsedRow {
            next_start: None,
            totals_marker: Some(index.saturating_sub(1)),
            label,
            record: None,
        });
    }

    // Redundant row total ahead of the breakdown.
    index += 1;

    let mut counts = [0_u64; COUNT_COLUMNS];
    for (found, count) in counts.iter_mut().enumerate() {
        let token = tokens.get(index).ok_or_else(|| ExtractError::TruncatedRow {
            index,
            label: label.clone(),
            found,
        })?;
        *count = numeric_value(token).ok_or_else(|| ExtractError::InvalidValue {
            index,
            label: label.clone(),
            token: token.clone(),
        })?;
        index += 1;
    }

    let record = RowRecord {
        owner: owner.to_string(),
        label: label.clone(),
        counts,
    };
    let next_start = if reaches_page_end(tokens, index, &layout.footer) {
        None
    } else {
        Some(index)
    };

    debug!(owner, label = %label, next_start = ?next_start, "parsed row");

    Ok(ParsedRow {
        next_start,
        totals_marker: None,
        label,
        record: Some(record),
    })
}

// The footer can trail the page-number marker by one token.
fn reaches_page_end(tokens: &[String], index: usize, footer: &str) -> bool {
    match tokens.get(index) {
        None => true,
        Some(token) if token == footer => true,
        Some(_) => tokens.get(index + 1).is_some_and(|token| token == footer),
    }
}
