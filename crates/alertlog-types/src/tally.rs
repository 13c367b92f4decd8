use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-entry error code counts.
///
/// The total lives in its own field rather than under a reserved key of the
/// count map, so no real code can ever collide with it. `counts` is ordered by
/// code, which keeps rendering and serialization stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeTally {
    pub counts: BTreeMap<String, usize>,
    pub total: usize,
}

impl CodeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `code`.
    pub fn record(&mut self, code: &str) {
        *self.counts.entry(code.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn get(&self, code: &str) -> usize {
        self.counts.get(code).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(code, count)| (code.as_str(), *count))
    }
}

impl<'a> FromIterator<&'a str> for CodeTally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = CodeTally::new();
        for code in iter {
            tally.record(code);
        }
        tally
    }
}
