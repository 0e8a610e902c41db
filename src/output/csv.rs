//! CSV output formatter
//!
//! One row per paper; list fields are joined into a single cell.

use crate::domain::{CompanyPaper, Report};
use crate::output::OutputFormatter;
use std::io::Write;

/// Column headers in output order
pub const CSV_HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// CSV formatter
#[derive(Debug, Default)]
pub struct CsvFormatter;

impl CsvFormatter {
    /// Create a new CSV formatter
    pub fn new() -> Self {
        Self
    }

    fn record(paper: &CompanyPaper) -> [String; 6] {
        [
            paper.pubmed_id.clone(),
            paper.title.clone(),
            paper.publication_date.clone(),
            paper.authors_display(),
            paper.companies_display(),
            paper.corresponding_email.clone(),
        ]
    }
}

impl OutputFormatter for CsvFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        if report.papers.is_empty() {
            tracing::warn!("No papers to format");
        }

        let mut csv_writer = ::csv::Writer::from_writer(writer);
        csv_writer
            .write_record(CSV_HEADERS)
            .map_err(std::io::Error::other)?;
        for paper in &report.papers {
            csv_writer
                .write_record(Self::record(paper))
                .map_err(std::io::Error::other)?;
        }
        csv_writer.flush()
    }
}
