//! pharma-papers - find PubMed papers with industry-affiliated authors
//!
//! This library provides the core functionality behind `get-papers-list`:
//! - PubMed search and record download through NCBI E-utilities
//! - PubMed XML parsing into papers, authors and affiliations
//! - Keyword-based classification of affiliations (academic vs. company)
//! - Text, CSV and JSON output

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod logging;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod progress;
pub mod pubmed;
