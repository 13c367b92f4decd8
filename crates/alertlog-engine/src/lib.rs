// Engine module - Core processing logic (segmentation, extraction, summary)
// This layer sits between decoded log text (core) and CLI presentation

mod extract;
mod segment;
mod summary;

pub use extract::extract_codes;
pub use segment::{is_entry_marker, segment};
pub use summary::{summarize, summarize_entry};

use alertlog_types::SummaryRecord;

// Façade API - Stable public interface for CLI layer

/// Run the full pipeline over decoded lines: segment, extract, summarize.
pub fn analyze_lines<S: AsRef<str>>(lines: &[S], preview_lines: usize) -> Vec<SummaryRecord> {
    let entries = segment(lines);
    summarize(&entries, preview_lines)
}
