//! Producer credit normalization.
//!
//! Credits use commas between producers and the word `and` before the last
//! one: `"Jane Doe, John Roe and Ann Poe"`. [`normalize`] turns such a
//! string into individual [`ProducerName`]s.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::ProducerName;

/// Matches `and` as a standalone word, including at either end of a
/// segment (`"A, B, and C"` leaves `"and C"` as its last segment).
fn conjunction() -> &'static Regex {
    static CONJUNCTION: OnceLock<Regex> = OnceLock::new();
    CONJUNCTION.get_or_init(|| {
        Regex::new(r"(?:^|\s+)and(?:\s+|$)").expect("conjunction pattern is a valid regex")
    })
}

/// Split a raw producer credit into producer names.
///
/// Splits on commas, then on the word `and` inside each segment. Tokens are
/// trimmed and empty ones dropped. Order of appearance is kept and
/// repeated names are not collapsed here.
pub fn normalize(raw: &str) -> Vec<ProducerName> {
    raw.split(',')
        .flat_map(|segment| conjunction().split(segment.trim()))
        .filter_map(ProducerName::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &str) -> Vec<String> {
        normalize(raw)
            .into_iter()
            .map(|n| n.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_single_producer() {
        assert_eq!(names("Bo Derek"), vec!["Bo Derek"]);
        assert_eq!(names("Allan Carr"), vec!["Allan Carr"]);
    }

    #[test]
    fn test_comma_and_conjunction() {
        assert_eq!(
            names("Jane Doe, John Roe and Ann Poe"),
            vec!["Jane Doe", "John Roe", "Ann Poe"]
        );
    }

    #[test]
    fn test_two_producers_joined_by_and() {
        assert_eq!(
            names("Wyck Godfrey and Stephenie Meyer"),
            vec!["Wyck Godfrey", "Stephenie Meyer"]
        );
    }

    #[test]
    fn test_oxford_comma() {
        assert_eq!(
            names("A One, B Two, and C Three"),
            vec!["A One", "B Two", "C Three"]
        );
    }

    #[test]
    fn test_and_inside_a_name_is_kept() {
        assert_eq!(names("Sandy Anderson"), vec!["Sandy Anderson"]);
        assert_eq!(
            names("Brandon Lee and Andrew Band"),
            vec!["Brandon Lee", "Andrew Band"]
        );
    }

    #[test]
    fn test_conjunction_is_case_sensitive() {
        assert_eq!(names("Tom AND Jerry"), vec!["Tom AND Jerry"]);
    }

    #[test]
    fn test_blank_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
        assert!(normalize(" , ,and, ").is_empty());
    }

    #[test]
    fn test_trims_and_keeps_duplicates() {
        assert_eq!(names("  Jane Doe ,Jane Doe  "), vec!["Jane Doe", "Jane Doe"]);
    }

    #[test]
    fn test_extra_whitespace_around_and() {
        assert_eq!(
            names("Jerry Weintraub   and\tMark Canton"),
            vec!["Jerry Weintraub", "Mark Canton"]
        );
    }
}
