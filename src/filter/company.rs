//! Company name extraction from free-text affiliations

use super::keywords::COMPANY_SUFFIXES;

/// Longest fallback name kept verbatim
const MAX_NAME_CHARS: usize = 50;

/// Characters kept before the ellipsis when a fallback name is too long
const TRUNCATED_CHARS: usize = 47;

/// Extract a company name from an affiliation string
///
/// When a legal-form suffix occurs, the comma-separated segment right before
/// its first occurrence is taken as the name and the suffix is re-attached
/// ("Oncology, Pfizer Inc., NY" -> "Pfizer Inc."). Otherwise the first
/// comma-separated segment is used, truncated to fit `MAX_NAME_CHARS`.
pub fn extract_company_name(affiliation: &str) -> String {
    for suffix in COMPANY_SUFFIXES {
        let Some((before, _)) = affiliation.split_once(suffix) else {
            continue;
        };
        if before.is_empty() {
            continue;
        }

        let company = before.rsplit(',').next().unwrap_or("").trim();
        if !company.is_empty() {
            return format!("{} {}", company, suffix);
        }
    }

    let first_segment = affiliation.split(',').next().unwrap_or("").trim();
    truncate_name(first_segment)
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() <= MAX_NAME_CHARS {
        return name.to_string();
    }
    let kept: String = name.chars().take(TRUNCATED_CHARS).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_after_department() {
        assert_eq!(
            extract_company_name("Oncology Research, Pfizer Inc., New York, NY, USA"),
            "Pfizer Inc."
        );
    }

    #[test]
    fn test_suffix_first_segment() {
        assert_eq!(
            extract_company_name("Novartis Pharma AG, Basel, Switzerland"),
            "Novartis Pharma AG"
        );
    }

    #[test]
    fn test_suffix_priority_follows_list_order() {
        // "Ltd." is tried before "Limited"
        assert_eq!(
            extract_company_name("Acme Limited, Acme Bio Ltd., London"),
            "Acme Bio Ltd."
        );
    }

    #[test]
    fn test_suffix_at_start_is_skipped() {
        assert_eq!(extract_company_name("LLC"), "LLC");
    }

    #[test]
    fn test_blank_segment_before_suffix_falls_through() {
        // text before "GmbH" ends with a comma, so that suffix yields nothing
        assert_eq!(
            extract_company_name("Roche Diagnostics, GmbH, Mannheim"),
            "Roche Diagnostics"
        );
    }

    #[test]
    fn test_fallback_first_segment() {
        assert_eq!(
            extract_company_name("Genentech, South San Francisco, CA"),
            "Genentech"
        );
    }

    #[test]
    fn test_fallback_truncates_long_names() {
        let long = "A".repeat(60);
        let name = extract_company_name(&long);
        assert_eq!(name.chars().count(), 50);
        assert!(name.ends_with("..."));
        assert!(name.starts_with(&"A".repeat(47)));
    }

    #[test]
    fn test_fallback_exactly_fifty_chars_kept() {
        let exact = "B".repeat(50);
        assert_eq!(extract_company_name(&exact), exact);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let long = "é".repeat(55);
        let name = extract_company_name(&long);
        assert_eq!(name.chars().count(), 50);
    }
}
