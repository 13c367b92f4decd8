//! Fixtures for sample alert log generation.

/// Builder for alert log text.
///
/// # Example
/// ```
/// use alertlog_testing::SampleLog;
///
/// let text = SampleLog::new()
///     .entry("Mon Jan 01 00:00:00 2024")
///     .line("ORA-00600: internal error")
///     .build();
/// assert_eq!(text, "Mon Jan 01 00:00:00 2024\nORA-00600: internal error\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SampleLog {
    text: String,
}

impl SampleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new entry with a timestamp line.
    pub fn entry(self, timestamp: &str) -> Self {
        self.line(timestamp)
    }

    /// Append one line (a `\n` terminator is added).
    pub fn line(mut self, line: &str) -> Self {
        self.text.push_str(line);
        self.text.push('\n');
        self
    }

    /// Append `count` lines of the same text.
    pub fn repeat(mut self, line: &str, count: usize) -> Self {
        for _ in 0..count {
            self = self.line(line);
        }
        self
    }

    pub fn build(self) -> String {
        self.text
    }

    /// The two-entry log used throughout the test suite: `ORA-00600` twice in
    /// the first entry, `ORA-07445` once in the second.
    pub fn two_entries() -> Self {
        Self::new()
            .entry("Mon Jan 01 00:00:00 2024")
            .line("ORA-00600: internal error")
            .line("ORA-00600: internal error")
            .entry("Tue Jan 02 00:00:00 2024")
            .line("ORA-07445: exception")
    }
}
