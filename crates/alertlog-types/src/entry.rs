/// A contiguous block of alert log lines describing one timestamped event.
///
/// Lines keep their terminators so that concatenating the lines of every
/// entry reproduces the source text byte for byte. The trimmed view used for
/// reporting is available through [`Entry::raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 1-based position in file order.
    pub ordinal: usize,
    /// Constituent lines, untrimmed, terminators included.
    pub lines: Vec<String>,
}

impl Entry {
    pub fn new(ordinal: usize, lines: Vec<String>) -> Self {
        Self { ordinal, lines }
    }

    /// All lines joined with `\n`, trailing whitespace removed.
    ///
    /// Line terminators are normalised, so CRLF and bare CR input report the
    /// same text as LF input.
    pub fn raw(&self) -> String {
        let joined = self
            .lines
            .iter()
            .map(|line| strip_terminator(line))
            .collect::<Vec<_>>()
            .join("\n");
        joined.trim_end().to_string()
    }

    /// First line of the trimmed text, used as the display timestamp.
    ///
    /// Empty when the entry consists only of whitespace.
    pub fn first_line(&self) -> String {
        self.raw().lines().next().unwrap_or_default().to_string()
    }

    /// The first `max_lines` lines of the trimmed text joined with `\n`.
    pub fn preview(&self, max_lines: usize) -> String {
        self.raw()
            .lines()
            .take(max_lines)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}
