use serde::{Deserialize, Serialize};

use crate::tally::CodeTally;

/// Externally visible summary of one entry.
///
/// Field order is the serialization order of the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// 1-based entry ordinal.
    pub entry_id: usize,
    /// First line of the entry, verbatim. May be empty.
    pub timestamp: String,
    /// Leading lines of the entry joined with `\n`.
    pub snippet: String,
    pub ora_counts: CodeTally,
    /// Full entry text with trailing whitespace trimmed.
    pub raw: String,
}

impl SummaryRecord {
    pub fn total_codes(&self) -> usize {
        self.ora_counts.total
    }
}
