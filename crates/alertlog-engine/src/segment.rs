use alertlog_types::{Entry, WEEKDAY_PREFIXES};

/// Whether `line` opens a new entry.
///
/// Literal prefix test on the untrimmed line.
pub fn is_entry_marker(line: &str) -> bool {
    WEEKDAY_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

/// Split raw lines into entries.
///
/// Every marker line closes the lines accumulated so far (if any) and starts a
/// new entry. Content before the first marker forms an entry of its own. The
/// result partitions the input: no line is dropped or repeated.
pub fn segment<S: AsRef<str>>(lines: &[S]) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if is_entry_marker(line) && !current.is_empty() {
            let ordinal = entries.len() + 1;
            entries.push(Entry::new(ordinal, std::mem::take(&mut current)));
        }
        current.push(line.to_string());
    }

    if !current.is_empty() {
        let ordinal = entries.len() + 1;
        entries.push(Entry::new(ordinal, current));
    }

    tracing::debug!(
        lines = lines.len(),
        entries = entries.len(),
        longest = entries.iter().map(Entry::line_count).max().unwrap_or(0),
        "segmented alert log"
    );

    entries
}
