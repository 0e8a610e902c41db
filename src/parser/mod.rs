//! PubMed XML parsing
//!
//! This module turns EFetch `PubmedArticleSet` documents into [`Paper`]s:
//! - Article title, including text inside inline markup
//! - Publication date from `PubDate` (Year/Month/Day or MedlineDate)
//! - Authors with affiliations (both `AffiliationInfo` and legacy `Affiliation`)
//! - Corresponding author email from several possible locations

mod email;
mod xml;

pub use email::{corresponding_email, find_email};

use crate::domain::{Author, Paper, PublicationDate, UNKNOWN_TITLE};
use crate::error::ParseError;
use roxmltree::{Document, Node, ParsingOptions};
use xml::{child_text, children_named, descendants_named, find_descendant, full_text, own_text};

/// Parse an EFetch XML batch into papers
///
/// Articles that cannot be parsed are logged and skipped; only a document that
/// is not well-formed XML fails the whole batch.
pub fn parse_article_set(xml_data: &str) -> Result<Vec<Paper>, ParseError> {
    // EFetch output carries a DOCTYPE declaration
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml_data, options)
        .map_err(|e| ParseError::invalid_xml(e.to_string()))?;

    let mut papers = Vec::new();
    for article in descendants_named(doc.root(), "PubmedArticle") {
        match parse_article(article) {
            Ok(paper) => {
                tracing::trace!("Parsed {}", paper);
                papers.push(paper);
            }
            Err(e) => {
                tracing::warn!("Skipping paper: {}", e);
            }
        }
    }

    tracing::debug!("Parsed {} papers from batch", papers.len());
    Ok(papers)
}

/// Parse a single PubmedArticle element
pub fn parse_article(article: Node<'_, '_>) -> Result<Paper, ParseError> {
    let pubmed_id = find_descendant(article, "PMID")
        .and_then(own_text)
        .ok_or(ParseError::MissingPmid)?;

    let title = find_descendant(article, "ArticleTitle")
        .and_then(full_text)
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    let paper = authors(article)
        .into_iter()
        .fold(
            Paper::new(pubmed_id, title).with_date(publication_date(article)),
            Paper::with_author,
        );

    Ok(match corresponding_email(article) {
        Some(email) => paper.with_email(email),
        None => paper,
    })
}

/// Publication date from the first PubDate element
fn publication_date(article: Node<'_, '_>) -> PublicationDate {
    let Some(pub_date) = find_descendant(article, "PubDate") else {
        return PublicationDate::Unknown;
    };

    let year = child_text(pub_date, "Year");
    if year.is_none() {
        if let Some(medline) = child_text(pub_date, "MedlineDate") {
            return PublicationDate::from_medline_date(&medline);
        }
    }

    PublicationDate::from_parts(
        year.as_deref(),
        child_text(pub_date, "Month").as_deref(),
        child_text(pub_date, "Day").as_deref(),
    )
}

/// Authors of the first AuthorList; collective authors (no LastName) are skipped
fn authors(article: Node<'_, '_>) -> Vec<Author> {
    let Some(author_list) = find_descendant(article, "AuthorList") else {
        return Vec::new();
    };

    children_named(author_list, "Author")
        .filter_map(|author_elem| {
            let last_name = child_text(author_elem, "LastName")?;
            let fore_name = child_text(author_elem, "ForeName");
            let mut author = Author::from_name_parts(fore_name.as_deref(), &last_name);
            author.affiliations = affiliations(author_elem);
            Some(author)
        })
        .collect()
}

fn affiliations(author_elem: Node<'_, '_>) -> Vec<String> {
    let mut affiliations: Vec<String> = descendants_named(author_elem, "AffiliationInfo")
        .filter_map(|info| child_text(info, "Affiliation"))
        .collect();

    // pre-2013 records put Affiliation directly under Author
    if let Some(direct) = child_text(author_elem, "Affiliation") {
        affiliations.push(direct);
    }

    affiliations
}
