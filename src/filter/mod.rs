//! Affiliation filtering
//!
//! This module provides:
//! - Keyword-based classification of affiliation strings
//! - Company name extraction heuristics
//! - Paper filtering down to those with company-affiliated authors

mod company;
mod keywords;

pub use company::extract_company_name;
pub use keywords::{
    ACADEMIC_KEYWORDS, COMPANY_SUFFIXES, GOVT_NONPROFIT_KEYWORDS, PHARMA_BIOTECH_KEYWORDS,
};

use crate::domain::{AffiliationKind, Author, CompanyPaper, Paper};
use keywords::contains_any;

/// Classify a single affiliation string
///
/// Keyword sets are checked in a fixed order (academic, government/non-profit,
/// company), so an academic keyword anywhere in the string wins over a
/// company keyword.
pub fn classify(affiliation: &str) -> AffiliationKind {
    let lower = affiliation.to_lowercase();
    if lower.trim().is_empty() {
        return AffiliationKind::Unclassified;
    }

    if contains_any(&lower, ACADEMIC_KEYWORDS) {
        AffiliationKind::Academic
    } else if contains_any(&lower, GOVT_NONPROFIT_KEYWORDS) {
        AffiliationKind::GovernmentOrNonProfit
    } else if contains_any(&lower, PHARMA_BIOTECH_KEYWORDS) {
        AffiliationKind::Company
    } else {
        AffiliationKind::Unclassified
    }
}

/// Company affiliation check result for one author
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorAffiliations {
    /// At least one affiliation classified as academic
    pub has_academic: bool,
    /// At least one affiliation classified as a company
    pub has_company: bool,
    /// Company names extracted from company affiliations
    pub companies: Vec<String>,
}

impl AuthorAffiliations {
    /// An author is non-academic if any affiliation is a company, even when
    /// academic affiliations are also listed
    pub fn is_non_academic(&self) -> bool {
        self.has_company
    }
}

/// Filter for identifying papers with pharmaceutical or biotech authors
#[derive(Debug, Clone, Default)]
pub struct AffiliationFilter;

impl AffiliationFilter {
    /// Create a new filter
    pub fn new() -> Self {
        Self
    }

    /// Classify all affiliations of an author
    pub fn check_author(&self, author: &Author) -> AuthorAffiliations {
        let mut result = AuthorAffiliations::default();

        for affiliation in &author.affiliations {
            let kind = classify(affiliation);
            tracing::trace!(author = %author.name, %kind, "{}", affiliation);
            match kind {
                AffiliationKind::Academic => result.has_academic = true,
                AffiliationKind::Company => {
                    result.has_company = true;
                    push_unique(&mut result.companies, extract_company_name(affiliation));
                }
                AffiliationKind::GovernmentOrNonProfit | AffiliationKind::Unclassified => {}
            }
        }

        result
    }

    /// Build the output row for a paper, or None if no author is at a company
    pub fn company_paper(&self, paper: &Paper) -> Option<CompanyPaper> {
        let mut authors = Vec::new();
        let mut companies = Vec::new();

        for author in &paper.authors {
            let checked = self.check_author(author);
            if !checked.is_non_academic() {
                continue;
            }
            tracing::debug!(
                pmid = %paper.pubmed_id,
                author = %author.name,
                mixed = checked.has_academic,
                "company-affiliated author"
            );
            authors.push(author.name.clone());
            for company in checked.companies {
                push_unique(&mut companies, company);
            }
        }

        if authors.is_empty() {
            return None;
        }

        Some(CompanyPaper {
            pubmed_id: paper.pubmed_id.clone(),
            title: paper.title.clone(),
            publication_date: paper.publication_date.to_string(),
            non_academic_authors: authors,
            company_affiliations: companies,
            corresponding_email: paper.corresponding_email.clone().unwrap_or_default(),
        })
    }

    /// Keep only papers with at least one company-affiliated author
    pub fn filter_papers(&self, papers: &[Paper]) -> Vec<CompanyPaper> {
        let filtered: Vec<CompanyPaper> = papers
            .iter()
            .filter_map(|paper| self.company_paper(paper))
            .collect();

        tracing::debug!(
            "Filtered {} of {} papers with company affiliations",
            filtered.len(),
            papers.len()
        );
        filtered
    }
}

fn push_unique(names: &mut Vec<String>, name: String) {
    if !name.is_empty() && !names.contains(&name) {
        names.push(name);
    }
}
