//! Paper and author structures

use super::PublicationDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when a record has no ArticleTitle
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// An author with the affiliation strings listed on the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name ("ForeName LastName")
    pub name: String,
    /// Affiliation strings in document order
    pub affiliations: Vec<String>,
}

impl Author {
    /// Creates a new author
    pub fn new(name: impl Into<String>, affiliations: Vec<String>) -> Self {
        Self {
            name: name.into(),
            affiliations,
        }
    }

    /// Builds the display name from the PubMed name parts
    pub fn from_name_parts(fore_name: Option<&str>, last_name: &str) -> Self {
        let name = format!("{} {}", fore_name.unwrap_or(""), last_name)
            .trim()
            .to_string();
        Self::new(name, Vec::new())
    }
}

/// A parsed PubMed article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// PubMed identifier
    pub pubmed_id: String,
    /// Article title
    pub title: String,
    /// Publication date with whatever precision the record has
    pub publication_date: PublicationDate,
    /// Authors in byline order
    pub authors: Vec<Author>,
    /// Corresponding author email, if one could be found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corresponding_email: Option<String>,
}

impl Paper {
    /// Creates a paper with no authors and an unknown date
    pub fn new(pubmed_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            pubmed_id: pubmed_id.into(),
            title: title.into(),
            publication_date: PublicationDate::Unknown,
            authors: Vec::new(),
            corresponding_email: None,
        }
    }

    /// Sets the publication date (builder pattern)
    pub fn with_date(mut self, date: PublicationDate) -> Self {
        self.publication_date = date;
        self
    }

    /// Adds an author (builder pattern)
    pub fn with_author(mut self, author: Author) -> Self {
        self.authors.push(author);
        self
    }

    /// Sets the corresponding email (builder pattern)
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.corresponding_email = Some(email.into());
        self
    }
}

impl fmt::Display for Paper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PMID {} ({}): {}",
            self.pubmed_id, self.publication_date, self.title
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_from_name_parts() {
        let author = Author::from_name_parts(Some("Jane"), "Doe");
        assert_eq!(author.name, "Jane Doe");
        assert!(author.affiliations.is_empty());
    }

    #[test]
    fn test_author_without_fore_name() {
        let author = Author::from_name_parts(None, "Doe");
        assert_eq!(author.name, "Doe");

        let author = Author::from_name_parts(Some(""), "Doe");
        assert_eq!(author.name, "Doe");
    }

    #[test]
    fn test_paper_builder() {
        let paper = Paper::new("123", "A study")
            .with_date(PublicationDate::Year { year: 2024 })
            .with_author(Author::new("Jane Doe", vec!["Pfizer Inc.".to_string()]))
            .with_email("jane@pfizer.com");

        assert_eq!(paper.pubmed_id, "123");
        assert_eq!(paper.authors.len(), 1);
        assert_eq!(paper.corresponding_email.as_deref(), Some("jane@pfizer.com"));
    }

    #[test]
    fn test_paper_display() {
        let paper = Paper::new("42", "Title").with_date(PublicationDate::Year { year: 2020 });
        assert_eq!(paper.to_string(), "PMID 42 (2020): Title");
    }
}
