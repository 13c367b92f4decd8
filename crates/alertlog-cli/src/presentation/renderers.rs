use anyhow::Result;

use crate::presentation::view_models::ReportViewModel;
use crate::presentation::views::ReportView;
use crate::types::OutputFormat;

pub trait Renderer {
    fn render_report(&self, report: &ReportViewModel) -> Result<()>;
}

pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Render the report into the exact text written to stdout.
    pub fn render_to_string(&self, report: &ReportViewModel) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
            OutputFormat::Plain => Ok(ReportView::new(report, self.color).to_string()),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render_report(&self, report: &ReportViewModel) -> Result<()> {
        print!("{}", self.render_to_string(report)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alertlog_types::{CodeTally, SummaryRecord};

    fn report() -> ReportViewModel {
        ReportViewModel {
            entries: vec![SummaryRecord {
                entry_id: 1,
                timestamp: "Thu Jan 04 00:00:00 2024".to_string(),
                snippet: "Thu Jan 04 00:00:00 2024\nORA-01555".to_string(),
                ora_counts: ["ORA-01555"].into_iter().collect::<CodeTally>(),
                raw: "Thu Jan 04 00:00:00 2024\nORA-01555".to_string(),
            }],
        }
    }

    #[test]
    fn test_json_is_bare_array_with_two_space_indent() {
        let out = ConsoleRenderer::new(OutputFormat::Json, false)
            .render_to_string(&report())
            .unwrap();

        assert!(out.starts_with("[\n  {\n    \"entry_id\": 1,"));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["ora_counts"]["total"], 1);
        assert_eq!(value[0]["ora_counts"]["counts"]["ORA-01555"], 1);
    }

    #[test]
    fn test_json_ignores_color() {
        let out = ConsoleRenderer::new(OutputFormat::Json, true)
            .render_to_string(&report())
            .unwrap();
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn test_empty_json_report() {
        let out = ConsoleRenderer::new(OutputFormat::Json, false)
            .render_to_string(&ReportViewModel { entries: vec![] })
            .unwrap();
        assert_eq!(out, "[]\n");
    }

    #[test]
    fn test_plain_uses_narrative_view() {
        let out = ConsoleRenderer::new(OutputFormat::Plain, false)
            .render_to_string(&report())
            .unwrap();
        assert!(out.starts_with("Total entries found: 1\n\n--- Entry 1 --- (1 ORA- errors)\n"));
    }
}
