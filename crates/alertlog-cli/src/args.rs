use crate::types::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "alertlog")]
#[command(about = "Group alert log entries by timestamp and count ORA- error codes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(value_name = "LOGFILE", help = "Path to the alert log file")]
    pub path: PathBuf,

    #[arg(short = 'j', long, help = "Print the summary as a JSON document")]
    pub json: bool,

    #[arg(
        long,
        value_name = "N",
        value_parser = parse_preview_lines,
        help = "Number of leading lines shown per entry [default: 5, or preview_lines from config]"
    )]
    pub preview_lines: Option<usize>,

    #[arg(long, value_name = "PATH", help = "Config file (overrides ALERTLOG_CONFIG)")]
    pub config: Option<String>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}

fn parse_preview_lines(value: &str) -> Result<usize, String> {
    let n: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a positive integer", value))?;
    if n == 0 {
        return Err("preview must keep at least 1 line".to_string());
    }
    Ok(n)
}
