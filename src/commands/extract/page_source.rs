use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{PageDumpFile, RenderedPage};

pub trait PageSource {
    fn paginate(&mut self) -> Option<RenderedPage>;
}

pub struct PageDump {
    pages: std::vec::IntoIter<RenderedPage>,
    page_count: usize,
}

impl PageDump {
    pub fn open(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let dump: PageDumpFile = serde_json::from_slice(&raw)
            .with_context(|| format!("failed to parse page dump {}", path.display()))?;
        Ok(Self::from_pages(dump.into_pages()))
    }

    pub fn from_pages(pages: Vec<RenderedPage>) -> Self {
        let page_count = pages.len();
        Self {
            pages: pages.into_iter(),
            page_count,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

impl PageSource for PageDump {
    fn paginate(&mut self) -> Option<RenderedPage> {
        self.pages.next()
    }
}
