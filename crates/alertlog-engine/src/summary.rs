use alertlog_types::{Entry, SummaryRecord};

use crate::extract::extract_codes;

/// Build one summary record per entry, preserving order.
pub fn summarize(entries: &[Entry], preview_lines: usize) -> Vec<SummaryRecord> {
    let records: Vec<SummaryRecord> = entries
        .iter()
        .map(|entry| summarize_entry(entry, preview_lines))
        .collect();

    tracing::debug!(
        entries = records.len(),
        codes = records.iter().map(|r| r.ora_counts.total).sum::<usize>(),
        "summarized entries"
    );

    records
}

pub fn summarize_entry(entry: &Entry, preview_lines: usize) -> SummaryRecord {
    let raw = entry.raw();
    SummaryRecord {
        entry_id: entry.ordinal,
        timestamp: entry.first_line(),
        snippet: entry.preview(preview_lines),
        ora_counts: extract_codes(&raw),
        raw,
    }
}
