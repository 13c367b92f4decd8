pub mod entry;
pub mod markers;
pub mod summary;
pub mod tally;

pub use entry::Entry;
pub use markers::{DEFAULT_PREVIEW_LINES, ERROR_CODE_DIGITS, ERROR_CODE_TAG, WEEKDAY_PREFIXES};
pub use summary::SummaryRecord;
pub use tally::CodeTally;
