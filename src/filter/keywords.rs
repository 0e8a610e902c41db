//! Keyword sets for affiliation classification
//!
//! Matching is a plain substring test against the lowercased affiliation, so
//! entries with a leading space (" inc", " co") only match at a word start.

/// Academic institution keywords
pub const ACADEMIC_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school",
    "academy",
    "faculty",
    "department",
    "laboratory",
    "hospital",
    "clinic",
    "medical center",
    "health system",
    "polytechnic",
    "academia",
];

/// Government and non-profit organization keywords
pub const GOVT_NONPROFIT_KEYWORDS: &[&str] = &[
    "ministry",
    "department of",
    "national institute",
    "foundation",
    "association",
    "society",
    "center for",
    "organization",
    "trust",
    "council",
    "agency",
    "authority",
    "public health",
    "government",
    "federal",
    "state",
    "county",
    "committee",
    "administration",
];

/// Pharmaceutical and biotech company keywords
pub const PHARMA_BIOTECH_KEYWORDS: &[&str] = &[
    "pharma",
    "biotech",
    "therapeutics",
    "bioscience",
    "laboratories",
    "labs",
    "biotechnology",
    "pharmaceutical",
    "biopharmaceutical",
    "genetics",
    "genomics",
    "life sciences",
    "biologics",
    "medicines",
    "drugs",
    " ltd",
    " llc",
    " inc",
    " corp",
    "diagnostics",
    " gmbh",
    " co",
    "biopharma",
];

/// Legal-form suffixes tried, in order, when extracting a company name
pub const COMPANY_SUFFIXES: &[&str] = &[
    "Inc.",
    "LLC",
    "Ltd.",
    "Limited",
    "Corp.",
    "Corporation",
    "GmbH",
    "Co.",
    "Company",
    "S.A.",
    "AG",
    "B.V.",
];

/// Returns true if any keyword occurs in the (already lowercased) text
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
