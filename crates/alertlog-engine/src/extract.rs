use alertlog_types::{CodeTally, ERROR_CODE_DIGITS, ERROR_CODE_TAG};
use regex::Regex;
use std::sync::LazyLock;

/// Regex for candidate error codes: the tag followed by the whole digit run.
/// Only runs of exactly `ERROR_CODE_DIGITS` digits are counted, so `ORA-006001`
/// never contributes an `ORA-00600`.
static ERROR_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("{}([0-9]+)", regex::escape(ERROR_CODE_TAG))).unwrap());

/// Count every error code in one entry's text.
pub fn extract_codes(text: &str) -> CodeTally {
    let mut tally = CodeTally::new();

    for caps in ERROR_CODE_REGEX.captures_iter(text) {
        if caps[1].len() != ERROR_CODE_DIGITS {
            continue;
        }
        tally.record(&caps[0]);
    }

    tracing::trace!(
        total = tally.total,
        distinct = tally.distinct(),
        "extracted error codes"
    );

    tally
}
