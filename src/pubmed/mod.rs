//! PubMed access through NCBI E-utilities
//!
//! This module provides:
//! - HTTP client shared foundation with retry logic
//! - ESearch (PMID search with paging) and EFetch (batched XML download)
//! - The `PaperSource` seam used by the orchestrator

mod client;
mod eutils;

pub use client::HttpClient;
pub use eutils::{PubMedClient, ESEARCH_MAX_PAGE, ESEARCH_MAX_RECORDS};

use crate::error::ApiError;
use async_trait::async_trait;

/// A source of PubMed records
#[async_trait]
pub trait PaperSource: Send + Sync {
    /// Human-readable source name for logs
    fn name(&self) -> &'static str;

    /// Search for PMIDs matching a query, returning at most `max_results`
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>, ApiError>;

    /// Download full records for the given PMIDs as raw XML batches
    async fn fetch_details(&self, pmids: &[String]) -> Result<Vec<String>, ApiError>;
}
