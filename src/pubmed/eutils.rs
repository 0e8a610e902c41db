//! NCBI E-utilities client
//!
//! - ESearch: `{base}/esearch.fcgi?db=pubmed&term=...&retmode=json`
//! - EFetch: `{base}/efetch.fcgi?db=pubmed&id=1,2,3&retmode=xml`
//!
//! Every request carries `tool` and `email` (and `api_key` when configured)
//! as NCBI's usage policy asks.

use crate::config::Settings;
use crate::error::ApiError;
use crate::pubmed::{HttpClient, PaperSource};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Largest `retmax` ESearch honours for a single page
pub const ESEARCH_MAX_PAGE: usize = 10_000;

/// ESearch only pages through the first 10,000 hits (`retstart` ≤ 9999)
pub const ESEARCH_MAX_RECORDS: usize = 10_000;

const ESEARCH: &str = "esearch";
const EFETCH: &str = "efetch";

/// ESearch JSON response envelope
#[derive(Debug, Deserialize)]
struct ESearchResponse {
    esearchresult: Option<ESearchResult>,
    /// Top-level error, e.g. for a rejected API key
    error: Option<String>,
}

/// ESearch result block
#[derive(Debug, Deserialize)]
struct ESearchResult {
    /// Total hits, encoded as a string
    count: Option<String>,
    #[serde(default)]
    idlist: Vec<String>,
    #[serde(rename = "ERROR")]
    error: Option<String>,
}

/// PubMed client backed by E-utilities
pub struct PubMedClient {
    client: HttpClient,
    settings: Settings,
    page_size: usize,
}

impl PubMedClient {
    /// Create a client from validated settings
    pub fn new(settings: Settings) -> Result<Self, ApiError> {
        let client =
            HttpClient::with_timeout(settings.timeout())?.with_max_retries(settings.max_retries);
        Ok(Self::with_client(client, settings))
    }

    /// Create a client with a custom HTTP client (for testing)
    pub fn with_client(client: HttpClient, settings: Settings) -> Self {
        Self {
            client,
            settings,
            page_size: ESEARCH_MAX_PAGE,
        }
    }

    /// Set the ESearch page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.clamp(1, ESEARCH_MAX_PAGE);
        self
    }

    /// Build an endpoint URL with the common identification parameters
    fn build_url(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Url, ApiError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let mut url =
            Url::parse(&format!("{}/{}.fcgi", base, endpoint)).map_err(|e| ApiError::InvalidUrl {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("db", "pubmed");
            for (key, value) in params {
                query.append_pair(key, value);
            }
            query.append_pair("tool", &self.settings.tool);
            query.append_pair("email", &self.settings.email);
            if let Some(api_key) = &self.settings.api_key {
                query.append_pair("api_key", api_key);
            }
        }

        Ok(url)
    }

    /// Fetch one ESearch page
    async fn search_page(
        &self,
        query: &str,
        retstart: usize,
        retmax: usize,
    ) -> Result<ESearchResult, ApiError> {
        let url = self.build_url(
            ESEARCH,
            &[
                ("term", query.to_string()),
                ("retstart", retstart.to_string()),
                ("retmax", retmax.to_string()),
                ("retmode", "json".to_string()),
            ],
        )?;

        let response: ESearchResponse = self.client.get_json(&url, ESEARCH).await?;
        if let Some(message) = response.error {
            return Err(ApiError::Remote {
                endpoint: ESEARCH.to_string(),
                message,
            });
        }

        let result = response
            .esearchresult
            .ok_or_else(|| ApiError::invalid_response(ESEARCH, "missing esearchresult"))?;
        if let Some(message) = &result.error {
            return Err(ApiError::Remote {
                endpoint: ESEARCH.to_string(),
                message: message.clone(),
            });
        }

        Ok(result)
    }

    async fn pause(&self) {
        let delay = self.settings.request_delay();
        if delay > Duration::ZERO {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl PaperSource for PubMedClient {
    fn name(&self) -> &'static str {
        "PubMed"
    }

    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>, ApiError> {
        tracing::debug!("Searching PubMed with query: {}", query);

        let mut pmids: Vec<String> = Vec::new();
        let mut retstart = 0;

        while pmids.len() < max_results {
            if retstart >= ESEARCH_MAX_RECORDS {
                tracing::warn!(
                    "ESearch returns at most {} records, stopping with {} of {} requested PMIDs",
                    ESEARCH_MAX_RECORDS,
                    pmids.len(),
                    max_results
                );
                break;
            }
            if retstart > 0 {
                self.pause().await;
            }

            let retmax = (max_results - pmids.len())
                .min(self.page_size)
                .min(ESEARCH_MAX_RECORDS - retstart);
            let page = self.search_page(query, retstart, retmax).await?;
            let total = page.count.as_deref().and_then(|c| c.parse::<usize>().ok());

            if page.idlist.is_empty() {
                break;
            }
            retstart += page.idlist.len();
            pmids.extend(page.idlist);

            if total.is_some_and(|total| retstart >= total) {
                break;
            }
        }

        pmids.truncate(max_results);
        tracing::debug!("Found {} papers matching the query", pmids.len());
        Ok(pmids)
    }

    async fn fetch_details(&self, pmids: &[String]) -> Result<Vec<String>, ApiError> {
        if pmids.is_empty() {
            tracing::warn!("No PMIDs provided to fetch_details");
            return Ok(Vec::new());
        }

        tracing::debug!("Fetching details for {} papers", pmids.len());

        let mut batches = Vec::new();
        for (index, chunk) in pmids.chunks(self.settings.batch_size).enumerate() {
            if index > 0 {
                self.pause().await;
            }

            let url = self.build_url(
                EFETCH,
                &[("id", chunk.join(",")), ("retmode", "xml".to_string())],
            )?;
            let xml = self.client.get_text(&url, EFETCH).await.inspect_err(|e| {
                tracing::error!("Error fetching paper details: {}", e);
            })?;

            tracing::debug!("Fetched batch {} ({} PMIDs)", index + 1, chunk.len());
            batches.push(xml);
        }

        tracing::debug!("Successfully fetched details for {} papers", pmids.len());
        Ok(batches)
    }
}
