use std::fmt;

use alertlog_types::{ERROR_CODE_TAG, SummaryRecord};
use owo_colors::OwoColorize;

use crate::presentation::view_models::ReportViewModel;

// --------------------------------------------------------
// Report View
// --------------------------------------------------------

pub struct ReportView<'a> {
    data: &'a ReportViewModel,
    color: bool,
}

impl<'a> ReportView<'a> {
    pub fn new(data: &'a ReportViewModel, color: bool) -> Self {
        Self { data, color }
    }

    fn header(&self, record: &SummaryRecord) -> String {
        let title = format!("--- Entry {} ---", record.entry_id);
        let count = format!("({} {} errors)", record.total_codes(), ERROR_CODE_TAG);

        if !self.color {
            return format!("{} {}", title, count);
        }

        if record.total_codes() > 0 {
            format!("{} {}", title.bold(), count.red().bold())
        } else {
            format!("{} {}", title.bold(), count.dimmed())
        }
    }

    fn code(&self, code: &str) -> String {
        if self.color {
            code.yellow().to_string()
        } else {
            code.to_string()
        }
    }
}

impl<'a> fmt::Display for ReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Total entries found: {}", self.data.total_entries())?;
        writeln!(f)?;

        for record in &self.data.entries {
            writeln!(f, "{}", self.header(record))?;
            writeln!(f, "{}", record.snippet)?;

            if !record.ora_counts.is_empty() {
                writeln!(f, "Full ORA counts:")?;
                for (code, count) in record.ora_counts.iter() {
                    writeln!(f, "  {}: {}", self.code(code), count)?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
