//! JSON output formatter for machine processing

use crate::domain::{CompanyPaper, Report};
use crate::output::OutputFormatter;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter {
    /// Fixed timestamp (for reproducible output in tests)
    generated_at: Option<DateTime<Utc>>,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter that stamps output with a fixed time
    pub fn with_timestamp(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at: Some(generated_at),
        }
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput<'a> {
    query: &'a str,
    generated_at: DateTime<Utc>,
    total_found: usize,
    total_parsed: usize,
    total_matched: usize,
    papers: &'a [CompanyPaper],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            query: &report.query,
            generated_at: self.generated_at.unwrap_or_else(Utc::now),
            total_found: report.total_found,
            total_parsed: report.total_parsed,
            total_matched: report.papers.len(),
            papers: &report.papers,
            warnings: report.warnings.clone(),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_report() -> Report {
        let mut report = Report::new("cancer");
        report.total_found = 3;
        report.total_parsed = 2;
        report.papers.push(CompanyPaper {
            pubmed_id: "1".to_string(),
            title: "T".to_string(),
            publication_date: "2024-01".to_string(),
            non_academic_authors: vec!["A".to_string(), "B".to_string()],
            company_affiliations: vec!["Pfizer Inc.".to_string()],
            corresponding_email: String::new(),
        });
        report
    }

    fn render(report: &Report) -> serde_json::Value {
        let formatter =
            JsonFormatter::with_timestamp(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        let mut buffer = Vec::new();
        formatter.format(report, &mut buffer).unwrap();
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn test_json_structure() {
        let value = render(&create_test_report());

        assert_eq!(value["query"], "cancer");
        assert_eq!(value["generated_at"], "2024-05-01T12:00:00Z");
        assert_eq!(value["total_found"], 3);
        assert_eq!(value["total_parsed"], 2);
        assert_eq!(value["total_matched"], 1);
        assert_eq!(value["papers"][0]["pubmed_id"], "1");
        assert_eq!(value["papers"][0]["non_academic_authors"][1], "B");
        assert!(value.get("warnings").is_none());
    }

    #[test]
    fn test_json_warnings() {
        let mut report = create_test_report();
        report.warnings.push("batch 2: XML parsing error".to_string());

        let value = render(&report);
        assert_eq!(value["warnings"][0], "batch 2: XML parsing error");
    }

    #[test]
    fn test_json_empty() {
        let value = render(&Report::new("nothing"));
        assert_eq!(value["papers"].as_array().unwrap().len(), 0);
        assert_eq!(value["total_matched"], 0);
    }
}
