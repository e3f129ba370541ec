//! Award list input types.

use serde::{Deserialize, Serialize};

/// One row of the award list.
///
/// Built once at the ingestion boundary; the engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardRecord {
    /// Ceremony year.
    pub year: i32,
    /// Movie title.
    pub title: String,
    /// Studio credit, as given.
    pub studios: String,
    /// Raw producer credit, possibly naming several producers
    /// (`"A, B and C"`).
    pub producers: String,
    /// Whether the movie won the award that year.
    pub winner: bool,
}

impl AwardRecord {
    pub fn new(
        year: i32,
        title: impl Into<String>,
        studios: impl Into<String>,
        producers: impl Into<String>,
        winner: bool,
    ) -> Self {
        Self {
            year,
            title: title.into(),
            studios: studios.into(),
            producers: producers.into(),
            winner,
        }
    }
}

/// A single producer extracted from a credit string.
///
/// The inner string is private so it is always trimmed and non-empty.
/// Equality is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProducerName(String);

impl ProducerName {
    /// Trim `raw` and wrap it; `None` when nothing is left.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(ProducerName(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProducerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for ProducerName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProducerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
