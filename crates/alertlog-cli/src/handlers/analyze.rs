use crate::presentation::presenters;
use crate::presentation::renderers::Renderer;
use anyhow::Result;
use std::path::Path;

pub fn handle(path: &Path, preview_lines: usize, renderer: &dyn Renderer) -> Result<()> {
    let lines = alertlog_core::read_log_lines(path)?;
    let records = alertlog_engine::analyze_lines(&lines, preview_lines);

    tracing::info!(
        path = %path.display(),
        lines = lines.len(),
        entries = records.len(),
        "analyzed alert log"
    );

    let report = presenters::present_report(records);
    renderer.render_report(&report)?;

    Ok(())
}
