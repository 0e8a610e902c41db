//! Output rows and run report

use serde::{Deserialize, Serialize};

/// Separator used when list fields are flattened to a single cell
pub const LIST_SEPARATOR: &str = ", ";

/// A paper with at least one company-affiliated author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPaper {
    pub pubmed_id: String,
    pub title: String,
    /// Rendered publication date
    pub publication_date: String,
    /// Names of authors with a company affiliation
    pub non_academic_authors: Vec<String>,
    /// Distinct company names, in order of first appearance
    pub company_affiliations: Vec<String>,
    /// Empty when unknown
    pub corresponding_email: String,
}

impl CompanyPaper {
    /// Non-academic authors joined for single-cell display
    pub fn authors_display(&self) -> String {
        self.non_academic_authors.join(LIST_SEPARATOR)
    }

    /// Company names joined for single-cell display
    pub fn companies_display(&self) -> String {
        self.company_affiliations.join(LIST_SEPARATOR)
    }
}

/// Result of one search-fetch-filter run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Query as given on the command line
    pub query: String,
    /// Number of PMIDs returned by the search
    pub total_found: usize,
    /// Number of records successfully parsed
    pub total_parsed: usize,
    /// Papers that passed the affiliation filter
    pub papers: Vec<CompanyPaper>,
    /// Non-fatal problems encountered during the run
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Report {
    /// Creates an empty report for a query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Returns true if the search matched nothing
    pub fn nothing_found(&self) -> bool {
        self.total_found == 0
    }

    /// Returns true if any non-fatal problem was recorded
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
