//! Output formatting for run reports
//!
//! This module provides:
//! - Text output for human-readable display
//! - CSV output for spreadsheets
//! - JSON output for machine processing

mod csv;
mod json;
mod text;

pub use self::csv::{CsvFormatter, CSV_HEADERS};
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::Report;
use crate::error::OutputError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// Comma-separated values
    Csv,
    /// JSON output for machine processing
    Json,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the full report
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create an output formatter for a format
pub fn create_formatter(format: OutputFormat, color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(color)),
        OutputFormat::Csv => Box::new(CsvFormatter::new()),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}

/// Write a report to a file in the given format
///
/// The parent directory must already exist. Text written to a file is never
/// colored.
pub fn write_report(path: &Path, format: OutputFormat, report: &Report) -> Result<(), OutputError> {
    let file = File::create(path).map_err(|e| OutputError::write_error(path, e))?;
    let mut writer = BufWriter::new(file);

    let formatter = create_formatter(format, false);
    formatter
        .format(report, &mut writer)
        .map_err(|e| OutputError::write_error(path, e))?;
    writer
        .flush()
        .map_err(|e| OutputError::write_error(path, e))?;

    tracing::info!("Results saved to {}", path.display());
    Ok(())
}
