use super::args::Cli;
use super::handlers;
use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;
use alertlog_core::Config;
use anyhow::Result;
use is_terminal::IsTerminal;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let preview_lines = cli.preview_lines.unwrap_or(config.preview_lines);
    let format = OutputFormat::from_json_flag(cli.json);
    let color = config.color.enabled(std::io::stdout().is_terminal());

    tracing::debug!(%format, preview_lines, color, "resolved options");

    let renderer = ConsoleRenderer::new(format, color);
    handlers::analyze::handle(&cli.path, preview_lines, &renderer)
}
