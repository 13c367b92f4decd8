// NOTE: alertlog pipeline
//
// - The whole file is read and decoded before anything is rendered, so a
//   failed run never leaves a partial report on stdout
// - Only alertlog-core touches the filesystem; the engine works on lines
// - stdout carries the report, stderr carries errors and tracing output

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::Cli;
pub use commands::run;
