//! Report output formatters.
//!
//! This module provides formatters for diagnostic reports in different
//! formats (human-readable lines, JSON).

pub mod human;
pub mod json;

/// Output format for diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

pub use human::{HumanFormatter, LineKind, ReportLine};
pub use json::JsonFormatter;
