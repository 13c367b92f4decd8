use alertlog_types::SummaryRecord;
use serde::Serialize;

/// The whole report. Serializes as a bare array of records.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ReportViewModel {
    pub entries: Vec<SummaryRecord>,
}

impl ReportViewModel {
    pub fn total_entries(&self) -> usize {
        self.entries.len()
    }
}
