//! Affiliation classification types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of organization an affiliation string refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffiliationKind {
    /// University, hospital, research institute
    Academic,
    /// Government body or non-profit organization
    GovernmentOrNonProfit,
    /// Pharmaceutical or biotech company
    Company,
    /// No keyword matched
    Unclassified,
}

impl fmt::Display for AffiliationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AffiliationKind::Academic => "academic",
            AffiliationKind::GovernmentOrNonProfit => "government/non-profit",
            AffiliationKind::Company => "company",
            AffiliationKind::Unclassified => "unclassified",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(AffiliationKind::Company.to_string(), "company");
        assert_eq!(
            AffiliationKind::GovernmentOrNonProfit.to_string(),
            "government/non-profit"
        );
    }
}
