use crate::{Error, Result};
use std::path::Path;

/// Read an alert log into memory as lines that keep their terminators.
///
/// Invalid UTF-8 is replaced with U+FFFD instead of failing the read, so the
/// engine always receives valid text. The file handle is closed before this
/// function returns.
pub fn read_log_lines(path: &Path) -> Result<Vec<String>> {
    let text = read_log_text(path)?;
    Ok(split_lines(&text))
}

/// Read and lossily decode the whole file.
pub fn read_log_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);

    if let std::borrow::Cow::Owned(_) = text {
        tracing::warn!(
            path = %path.display(),
            "log contains invalid UTF-8; replaced undecodable bytes"
        );
    }
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read log file");

    Ok(text.into_owned())
}

/// Split text into lines, each retaining its terminator.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A final line without a
/// terminator is kept as is. Empty text yields no lines.
pub fn split_lines(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;

    for (i, &b) in bytes.iter().enumerate() {
        let ends_line = match b {
            b'\n' => true,
            b'\r' => bytes.get(i + 1) != Some(&b'\n'),
            _ => false,
        };
        if ends_line {
            lines.push(text[start..=i].to_string());
            start = i + 1;
        }
    }

    if start < text.len() {
        lines.push(text[start..].to_string());
    }

    lines
}
