//! Command handlers for size-report CLI
//!
//! Each submodule handles a specific CLI command.

pub mod completions;
pub mod report;

// Re-export command functions for convenient access
pub use completions::cmd_completions;
pub use report::{cmd_report, ReportOptions};
