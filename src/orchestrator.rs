//! Run orchestrator for the search workflow
//!
//! This module provides:
//! - Workflow coordination: search → fetch → parse → filter
//! - Progress display between steps
//! - Partial continuation when a fetched batch cannot be parsed

use crate::config::Settings;
use crate::domain::Report;
use crate::error::AppError;
use crate::filter::AffiliationFilter;
use crate::parser::parse_article_set;
use crate::progress::Progress;
use crate::pubmed::{PaperSource, PubMedClient};

/// Orchestrator for a single query run
pub struct Orchestrator {
    /// Where records come from
    source: Box<dyn PaperSource>,
    /// Affiliation filter
    filter: AffiliationFilter,
    /// Whether to show a progress spinner
    show_progress: bool,
}

impl Orchestrator {
    /// Create an orchestrator backed by PubMed E-utilities
    pub fn new(settings: Settings) -> Result<Self, AppError> {
        let client = PubMedClient::new(settings)?;
        Ok(Self::with_source(Box::new(client)))
    }

    /// Create an orchestrator with a custom paper source (for testing)
    pub fn with_source(source: Box<dyn PaperSource>) -> Self {
        Self {
            source,
            filter: AffiliationFilter::new(),
            show_progress: false,
        }
    }

    /// Enable or disable the progress spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run the workflow for a query
    ///
    /// API failures abort the run; a batch that is not well-formed XML is
    /// recorded as a warning and skipped.
    pub async fn run(&self, query: &str, max_results: usize) -> Result<Report, AppError> {
        let mut progress = Progress::new(self.show_progress);
        let mut report = Report::new(query);

        tracing::info!("Searching for papers matching: {}", query);
        tracing::info!("Maximum results set to: {}", max_results);

        // Step 1: Search for PMIDs
        progress.step(&format!("Searching {}...", self.source.name()));
        let pmids = self.source.search(query, max_results).await?;
        report.total_found = pmids.len();

        if pmids.is_empty() {
            progress.finish_and_clear();
            tracing::warn!("No papers found matching the query");
            return Ok(report);
        }

        // Step 2: Fetch full records
        progress.step(&format!("Fetching {} records...", pmids.len()));
        let batches = self.source.fetch_details(&pmids).await?;

        // Step 3: Parse records
        progress.step("Parsing records...");
        let mut papers = Vec::new();
        for (index, xml) in batches.iter().enumerate() {
            match parse_article_set(xml) {
                Ok(parsed) => papers.extend(parsed),
                Err(e) => {
                    tracing::error!("Skipping batch {}: {}", index + 1, e);
                    report.warnings.push(format!("batch {}: {}", index + 1, e));
                }
            }
        }
        report.total_parsed = papers.len();
        tracing::info!("Successfully parsed details for {} papers", papers.len());

        // Step 4: Filter by affiliation
        progress.step("Filtering affiliations...");
        report.papers = self.filter.filter_papers(&papers);
        progress.finish_and_clear();

        tracing::info!(
            "Found {} papers with pharmaceutical/biotech affiliations",
            report.papers.len()
        );

        Ok(report)
    }
}
