use crate::model::RowRecord;

pub trait RowSink {
    fn append(&mut self, record: RowRecord);
}

#[derive(Debug, Default)]
pub struct RowCollector {
    rows: Vec<RowRecord>,
}

impl RowCollector {
    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl RowSink for RowCollector {
    fn append(&mut self, record: RowRecord) {
        self.rows.push(record);
    }
}
