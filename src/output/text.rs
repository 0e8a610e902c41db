//! Text output formatter for human-readable display
//!
//! Each paper is printed as a labelled block. Colors only affect the labels
//! and headers; the text is identical with and without them.

use crate::domain::{CompanyPaper, Report};
use crate::output::OutputFormatter;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn label(&self, label: &str) -> String {
        if self.color {
            label.bold().to_string()
        } else {
            label.to_string()
        }
    }

    /// Write one labelled paper block (1-based index)
    fn format_paper(
        &self,
        index: usize,
        paper: &CompanyPaper,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let title = format!("--- Paper {} ---", index);
        if self.color {
            writeln!(writer, "{}", title.cyan())?;
        } else {
            writeln!(writer, "{}", title)?;
        }

        let authors = paper.authors_display();
        let companies = paper.companies_display();
        let fields = [
            ("PubMed ID:", paper.pubmed_id.as_str()),
            ("Title:", paper.title.as_str()),
            ("Publication Date:", paper.publication_date.as_str()),
            ("Non-academic Author(s):", authors.as_str()),
            ("Company Affiliation(s):", companies.as_str()),
            (
                "Corresponding Author Email:",
                paper.corresponding_email.as_str(),
            ),
        ];
        for (label, value) in fields {
            writeln!(writer, "{} {}", self.label(label), value)?;
        }

        writeln!(writer)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        if report.papers.is_empty() {
            return writeln!(writer, "No matching papers found.");
        }

        let header = format!(
            "Found {} papers with pharma/biotech company affiliations:",
            report.papers.len()
        );
        if self.color {
            writeln!(writer, "\n{}\n", header.green().bold())?;
        } else {
            writeln!(writer, "\n{}\n", header)?;
        }

        for (i, paper) in report.papers.iter().enumerate() {
            self.format_paper(i + 1, paper, writer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_report() -> Report {
        let mut report = Report::new("q");
        report.papers.push(CompanyPaper {
            pubmed_id: "38000001".to_string(),
            title: "Targeting KRAS".to_string(),
            publication_date: "2023-11-05".to_string(),
            non_academic_authors: vec!["Brian Lee".to_string(), "Ann Wu".to_string()],
            company_affiliations: vec!["Pfizer Inc.".to_string()],
            corresponding_email: "brian.lee@pfizer.com".to_string(),
        });
        report
    }

    fn render(report: &Report) -> String {
        let mut buffer = Vec::new();
        TextFormatter::new(false).format(report, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(render(&Report::new("q")), "No matching papers found.\n");
    }

    #[test]
    fn test_plain_output() {
        let expected = "\nFound 1 papers with pharma/biotech company affiliations:\n\n\
                        --- Paper 1 ---\n\
                        PubMed ID: 38000001\n\
                        Title: Targeting KRAS\n\
                        Publication Date: 2023-11-05\n\
                        Non-academic Author(s): Brian Lee, Ann Wu\n\
                        Company Affiliation(s): Pfizer Inc.\n\
                        Corresponding Author Email: brian.lee@pfizer.com\n\
                        \n";
        assert_eq!(render(&create_test_report()), expected);
    }

    #[test]
    fn test_missing_email_left_blank() {
        let mut report = create_test_report();
        report.papers[0].corresponding_email.clear();

        let output = render(&report);
        assert!(output.contains("Corresponding Author Email: \n"));
        assert!(!output.contains("N/A"));
    }

    #[test]
    fn test_numbering() {
        let mut report = create_test_report();
        let second = report.papers[0].clone();
        report.papers.push(second);

        let output = render(&report);
        assert!(output.contains("Found 2 papers"));
        assert!(output.contains("--- Paper 2 ---"));
    }
}
