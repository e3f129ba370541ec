//! Win-interval output types.
//!
//! Field names serialize in camelCase (`previousWin`, `followingWin`) to
//! match the published result document.

use serde::{Deserialize, Serialize};

use super::award::ProducerName;

/// Gap between two consecutive wins of the same producer.
///
/// # Invariants
///
/// `interval == following_win - previous_win` and `previous_win <=
/// following_win`. Equality only happens when a producer won twice in the
/// same year, which yields `interval == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalRecord {
    pub producer: ProducerName,
    pub interval: i32,
    pub previous_win: i32,
    pub following_win: i32,
}

impl IntervalRecord {
    /// Build a record from an ordered pair of win years.
    pub fn between(producer: ProducerName, previous_win: i32, following_win: i32) -> Self {
        Self {
            producer,
            interval: following_win - previous_win,
            previous_win,
            following_win,
        }
    }
}

/// Records sharing the global minimum gap and those sharing the global
/// maximum gap.
///
/// Both lists are empty when no producer has more than one win. When every
/// gap is equal, `min` and `max` carry the same records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtremesResult {
    pub min: Vec<IntervalRecord>,
    pub max: Vec<IntervalRecord>,
}

impl ExtremesResult {
    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }

    /// Gap value shared by every record in `min`.
    pub fn min_interval(&self) -> Option<i32> {
        self.min.first().map(|r| r.interval)
    }

    /// Gap value shared by every record in `max`.
    pub fn max_interval(&self) -> Option<i32> {
        self.max.first().map(|r| r.interval)
    }
}
