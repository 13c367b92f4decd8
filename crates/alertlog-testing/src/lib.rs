//! Testing infrastructure for alertlog integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `SampleLog`: builder for alert log text
//! - `TestWorld`: isolated temp directory and CLI runner
//! - `assertions`: checks on the JSON report

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::SampleLog;
pub use world::{CliResult, TestWorld};
