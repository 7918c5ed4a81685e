use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use super::layout::{OFFICER_NAME_DIRECTIVE, OFFICER_NAME_PATTERN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficerName {
    pub parts: Vec<String>,
}

impl OfficerName {
    pub fn owner(&self) -> String {
        self.parts.concat()
    }
}

pub struct OfficerNameParser {
    directive: Regex,
    name_part: Regex,
    window_chars: usize,
}

impl OfficerNameParser {
    pub fn new(window_chars: usize) -> Result<Self> {
        Ok(Self {
            directive: Regex::new(OFFICER_NAME_DIRECTIVE)
                .context("failed to compile officer name directive regex")?,
            name_part: Regex::new(OFFICER_NAME_PATTERN)
                .context("failed to compile officer name regex")?,
            window_chars,
        })
    }

    pub fn parse(&self, markdown: &str) -> Vec<OfficerName> {
        self.directive
            .split(markdown)
            .skip(1)
            .filter_map(|section| self.parse_section(section))
            .collect()
    }

    fn parse_section(&self, section: &str) -> Option<OfficerName> {
        let window = match section.char_indices().nth(self.window_chars) {
            Some((end, _)) => &section[..end],
            None => section,
        };
        let lines = window.trim().lines().collect::<Vec<&str>>();

        let mut parts = Vec::new();
        let mut index = 0;
        while let Some(line) = lines.get(index) {
            let Some(text_run) = line.strip_prefix('(') else {
                break;
            };
            let candidate = text_run.split(')').next().unwrap_or_default().trim();
            if !self.name_part.is_match(candidate) {
                debug!(candidate, "rejected officer name part");
                break;
            }
            parts.push(candidate.to_string());
            // Skip the positioning line that follows each text run.
            index += 2;
        }

        if parts.is_empty() {
            None
        } else {
            Some(OfficerName { parts })
        }
    }
}
