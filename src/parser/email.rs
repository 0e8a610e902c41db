//! Corresponding author email lookup
//!
//! PubMed has no dedicated field for the corresponding author, so the address
//! is searched in several places, in priority order:
//! 1. `ArticleId` with `IdType="email"`
//! 2. the first email-looking token in any `Affiliation`
//! 3. `ELocationID` with `EIdType="email"`
//! 4. a `FootnoteList/Footnote` mentioning correspondence or email

use super::xml::{children_named, descendants_named, own_text};
use regex::Regex;
use roxmltree::Node;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap());

/// Find the first email-looking token in free text
pub fn find_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// Look up the corresponding author email within a PubmedArticle element
pub fn corresponding_email(article: Node<'_, '_>) -> Option<String> {
    if let Some(email) = descendants_named(article, "ArticleId")
        .find(|n| n.attribute("IdType") == Some("email"))
        .and_then(own_text)
    {
        return Some(email);
    }

    if let Some(email) = descendants_named(article, "Affiliation")
        .filter_map(own_text)
        .find_map(|text| find_email(&text))
    {
        return Some(email);
    }

    if let Some(email) = descendants_named(article, "ELocationID")
        .find(|n| n.attribute("EIdType") == Some("email"))
        .and_then(own_text)
    {
        return Some(email);
    }

    descendants_named(article, "FootnoteList")
        .flat_map(|list| children_named(list, "Footnote"))
        .filter_map(own_text)
        .filter(|text| {
            let lower = text.to_lowercase();
            lower.contains("correspondence") || lower.contains("email")
        })
        .find_map(|text| find_email(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    fn lookup(xml: &str) -> Option<String> {
        let doc = Document::parse(xml).unwrap();
        corresponding_email(doc.root_element())
    }

    #[test]
    fn test_find_email_strips_trailing_period() {
        assert_eq!(
            find_email("Pfizer Inc., New York. Electronic address: jane.doe@pfizer.com.")
                .as_deref(),
            Some("jane.doe@pfizer.com")
        );
    }

    #[test]
    fn test_find_email_none() {
        assert_eq!(find_email("Harvard University, Boston"), None);
    }

    #[test]
    fn test_article_id_has_priority() {
        let xml = r#"<PubmedArticle>
            <AffiliationInfo><Affiliation>Acme, x@acme.com</Affiliation></AffiliationInfo>
            <ArticleIdList><ArticleId IdType="email">first@choice.org</ArticleId></ArticleIdList>
        </PubmedArticle>"#;
        assert_eq!(lookup(xml).as_deref(), Some("first@choice.org"));
    }

    #[test]
    fn test_affiliation_email() {
        let xml = r#"<PubmedArticle>
            <Affiliation>Harvard University</Affiliation>
            <Affiliation>Biogen, Cambridge. bob@biogen.com</Affiliation>
            <ELocationID EIdType="email">late@x.org</ELocationID>
        </PubmedArticle>"#;
        assert_eq!(lookup(xml).as_deref(), Some("bob@biogen.com"));
    }

    #[test]
    fn test_elocation_email() {
        let xml = r#"<PubmedArticle>
            <ELocationID EIdType="doi">10.1000/xyz</ELocationID>
            <ELocationID EIdType="email">eloc@x.org</ELocationID>
        </PubmedArticle>"#;
        assert_eq!(lookup(xml).as_deref(), Some("eloc@x.org"));
    }

    #[test]
    fn test_footnote_email() {
        let xml = r#"<PubmedArticle>
            <FootnoteList>
                <Footnote>Funding by nobody@fund.org</Footnote>
                <Footnote>Correspondence: corr@pharma.com</Footnote>
            </FootnoteList>
        </PubmedArticle>"#;
        assert_eq!(lookup(xml).as_deref(), Some("corr@pharma.com"));
    }

    #[test]
    fn test_no_email() {
        assert_eq!(lookup("<PubmedArticle><PMID>1</PMID></PubmedArticle>"), None);
    }
}
