use alertlog_core::{Config, read_log_lines, read_log_text};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_file_has_no_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("alert_empty.log");
    fs::write(&path, "").unwrap();

    let lines = read_log_lines(&path).unwrap();
    assert!(lines.is_empty());
}

#[test]
fn test_lines_reconstruct_file_contents() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("alert_orcl.log");
    let contents = "Mon Jan 01 00:00:00 2024\r\nORA-00600\r\n\r\nTue Jan 02 00:00:00 2024\nno newline at end";
    fs::write(&path, contents).unwrap();

    let lines = read_log_lines(&path).unwrap();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines.concat(), contents);
    assert_eq!(read_log_text(&path).unwrap(), contents);
}

#[test]
fn test_config_in_temp_dir() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "preview_lines = 2\ncolor = \"always\"\n").unwrap();

    let config = Config::load(Some(path.to_str().unwrap())).unwrap();
    assert_eq!(config.preview_lines, 2);
    assert_eq!(config.color, alertlog_core::ColorMode::Always);
}
