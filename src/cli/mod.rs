//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod demo;
pub mod report;

pub use demo::handle_demo_command;
pub use report::{handle_report_command, ReportArgs, ReportFormat};
