//! Core domain models for pharma-papers
//!
//! This module contains the fundamental types used throughout the application:
//! - Papers and authors as parsed from PubMed records
//! - Publication dates with partial precision
//! - Affiliation classification results
//! - Output rows and the overall run report

mod affiliation;
mod paper;
mod publication_date;
mod report;

pub use affiliation::AffiliationKind;
pub use paper::{Author, Paper, UNKNOWN_TITLE};
pub use publication_date::{PublicationDate, UNKNOWN_DATE};
pub use report::{CompanyPaper, Report, LIST_SEPARATOR};
