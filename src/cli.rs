//! CLI argument parsing module for get-papers-list

use crate::output::OutputFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default number of search results to process
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Output format as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable listing
    Text,
    /// Comma-separated values with a header row
    Csv,
    /// JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn parse_max_results(s: &str) -> Result<usize, String> {
    let value: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", s))?;
    if value == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(value)
}

/// Fetch research papers with authors affiliated with pharmaceutical companies
#[derive(Parser, Debug, Clone)]
#[command(
    name = "get-papers-list",
    version,
    about = "Fetch research papers with authors affiliated with pharmaceutical or biotech companies"
)]
pub struct CliArgs {
    /// PubMed search query (full PubMed query syntax is supported)
    pub query: String,

    // Output options
    /// Output file path; results are written as CSV unless --format says otherwise
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output format (default: text on stdout, csv with --file)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Disable colored text output
    #[arg(long)]
    pub no_color: bool,

    // General options
    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Hide the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Maximum number of results to process
    #[arg(short, long = "max", default_value_t = DEFAULT_MAX_RESULTS, value_parser = parse_max_results)]
    pub max_results: usize,

    // E-utilities options
    /// Contact email sent to NCBI
    #[arg(long, env = "NCBI_EMAIL")]
    pub email: Option<String>,

    /// NCBI API key
    #[arg(long, env = "NCBI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path to a TOML config file with a [pubmed] table
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the E-utilities base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Number of PMIDs per fetch request
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Pause between fetch requests in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

impl CliArgs {
    /// Resolve the output format: explicit --format, else CSV for files, else text
    pub fn output_format(&self) -> OutputFormat {
        match (self.format, &self.file) {
            (Some(format), _) => format.into(),
            (None, Some(_)) => OutputFormat::Csv,
            (None, None) => OutputFormat::Text,
        }
    }

    /// Whether terminal colors should be used for stdout output
    pub fn use_color(&self) -> bool {
        !self.no_color && self.file.is_none()
    }
}
