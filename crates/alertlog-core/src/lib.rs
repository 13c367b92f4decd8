pub mod config;
pub mod error;
pub mod io;

pub use config::{ColorMode, Config, resolve_config_path};
pub use error::{Error, Result};
pub use io::{read_log_lines, read_log_text, split_lines};
