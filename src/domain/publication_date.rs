//! Publication dates as PubMed records them
//!
//! PubMed dates are frequently partial (year only, or year and month), so the
//! precision is part of the type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering used when no year is available
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// Publication date with record-dependent precision
///
/// Month and day are kept as text: PubMed months are usually three-letter
/// names (normalized to `01`..`12`) but some records carry free text that is
/// passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "precision", rename_all = "snake_case")]
pub enum PublicationDate {
    Full {
        year: u16,
        month: String,
        day: String,
    },
    YearMonth {
        year: u16,
        month: String,
    },
    Year {
        year: u16,
    },
    Unknown,
}

impl PublicationDate {
    /// Builds a date from the optional Year/Month/Day texts of a PubDate element
    pub fn from_parts(year: Option<&str>, month: Option<&str>, day: Option<&str>) -> Self {
        let Some(year) = year.and_then(parse_year) else {
            return PublicationDate::Unknown;
        };
        let month = month.map(str::trim).filter(|m| !m.is_empty());
        let day = day.map(str::trim).filter(|d| !d.is_empty());

        match (month, day) {
            (Some(month), Some(day)) => PublicationDate::Full {
                year,
                month: normalize_month(month),
                day: day.to_string(),
            },
            (Some(month), None) => PublicationDate::YearMonth {
                year,
                month: normalize_month(month),
            },
            _ => PublicationDate::Year { year },
        }
    }

    /// Parses a MedlineDate such as "2023 Jan-Feb" or "1998 Spring"
    ///
    /// Only the leading year and a leading month name are used.
    pub fn from_medline_date(text: &str) -> Self {
        let mut tokens = text.split_whitespace();
        let Some(year) = tokens.next().and_then(|t| t.get(..4)).and_then(parse_year) else {
            return PublicationDate::Unknown;
        };

        let month = tokens
            .next()
            .and_then(|t| t.get(..3))
            .and_then(month_number);

        match month {
            Some(month) => PublicationDate::YearMonth {
                year,
                month: month.to_string(),
            },
            None => PublicationDate::Year { year },
        }
    }
}

impl fmt::Display for PublicationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublicationDate::Full { year, month, day } => write!(f, "{}-{}-{}", year, month, day),
            PublicationDate::YearMonth { year, month } => write!(f, "{}-{}", year, month),
            PublicationDate::Year { year } => write!(f, "{}", year),
            PublicationDate::Unknown => write!(f, "{}", UNKNOWN_DATE),
        }
    }
}

fn parse_year(text: &str) -> Option<u16> {
    let text = text.trim();
    if text.len() != 4 || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Maps an English three-letter month abbreviation to its two-digit number
fn month_number(name: &str) -> Option<&'static str> {
    let number = match name {
        "Jan" => "01",
        "Feb" => "02",
        "Mar" => "03",
        "Apr" => "04",
        "May" => "05",
        "Jun" => "06",
        "Jul" => "07",
        "Aug" => "08",
        "Sep" => "09",
        "Oct" => "10",
        "Nov" => "11",
        "Dec" => "12",
        _ => return None,
    };
    Some(number)
}

fn normalize_month(month: &str) -> String {
    month_number(month)
        .map(str::to_string)
        .unwrap_or_else(|| month.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_date_with_month_name() {
        let date = PublicationDate::from_parts(Some("2023"), Some("Mar"), Some("07"));
        assert_eq!(date.to_string(), "2023-03-07");
    }

    #[test]
    fn test_numeric_month_kept() {
        let date = PublicationDate::from_parts(Some("2023"), Some("11"), Some("21"));
        assert_eq!(date.to_string(), "2023-11-21");
    }

    #[test]
    fn test_year_month() {
        let date = PublicationDate::from_parts(Some("2022"), Some("Dec"), None);
        assert_eq!(date.to_string(), "2022-12");
    }

    #[test]
    fn test_day_without_month_is_year_only() {
        let date = PublicationDate::from_parts(Some("2022"), None, Some("05"));
        assert_eq!(date, PublicationDate::Year { year: 2022 });
        assert_eq!(date.to_string(), "2022");
    }

    #[test]
    fn test_missing_year_is_unknown() {
        let date = PublicationDate::from_parts(None, Some("Jan"), Some("01"));
        assert_eq!(date, PublicationDate::Unknown);
        assert_eq!(date.to_string(), "Unknown Date");
    }

    #[test]
    fn test_blank_parts_ignored() {
        let date = PublicationDate::from_parts(Some(" 2021 "), Some(""), Some("  "));
        assert_eq!(date, PublicationDate::Year { year: 2021 });
    }

    #[test]
    fn test_unrecognized_month_passed_through() {
        let date = PublicationDate::from_parts(Some("2020"), Some("Spring"), None);
        assert_eq!(date.to_string(), "2020-Spring");
    }

    #[test]
    fn test_medline_date() {
        assert_eq!(
            PublicationDate::from_medline_date("2023 Jan-Feb").to_string(),
            "2023-01"
        );
        assert_eq!(
            PublicationDate::from_medline_date("1998 Spring").to_string(),
            "1998"
        );
        assert_eq!(
            PublicationDate::from_medline_date("2019-2020").to_string(),
            "2019"
        );
        assert_eq!(
            PublicationDate::from_medline_date("n.d."),
            PublicationDate::Unknown
        );
        assert_eq!(PublicationDate::from_medline_date(""), PublicationDate::Unknown);
    }
}
