//! Custom assertions for the JSON report.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that the report contains the expected number of entries.
pub fn assert_entry_count(json: &Value, expected: usize) -> Result<()> {
    let entries = json.as_array().context("Expected a JSON array of entries")?;

    if entries.len() != expected {
        anyhow::bail!("Expected {} entries, got {}", expected, entries.len());
    }

    Ok(())
}

/// Assert that entry ids run 1..=n in order.
pub fn assert_contiguous_ids(json: &Value) -> Result<()> {
    let entries = json.as_array().context("Expected a JSON array of entries")?;

    for (i, entry) in entries.iter().enumerate() {
        let id = entry["entry_id"]
            .as_u64()
            .with_context(|| format!("Entry {} missing entry_id", i))?;

        if id != (i as u64) + 1 {
            anyhow::bail!("Entry at position {} has id {}", i, id);
        }
    }

    Ok(())
}

/// Assert that every entry's total equals the sum of its per-code counts.
pub fn assert_totals_consistent(json: &Value) -> Result<()> {
    let entries = json.as_array().context("Expected a JSON array of entries")?;

    for (i, entry) in entries.iter().enumerate() {
        let tally = &entry["ora_counts"];
        let total = tally["total"]
            .as_u64()
            .with_context(|| format!("Entry {} missing ora_counts.total", i))?;
        let sum: u64 = tally["counts"]
            .as_object()
            .with_context(|| format!("Entry {} missing ora_counts.counts", i))?
            .values()
            .filter_map(Value::as_u64)
            .sum();

        if total != sum {
            anyhow::bail!("Entry {} total {} != sum of counts {}", i, total, sum);
        }
    }

    Ok(())
}

/// Totals per entry, in order.
pub fn entry_totals(json: &Value) -> Result<Vec<u64>> {
    json.as_array()
        .context("Expected a JSON array of entries")?
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            entry["ora_counts"]["total"]
                .as_u64()
                .with_context(|| format!("Entry {} missing ora_counts.total", i))
        })
        .collect()
}
