//! Per-producer win history.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{AwardRecord, ProducerName};
use crate::normalize::normalize;

/// Win years per producer, in the order the records were folded.
///
/// Every producer present has at least one year. Years are not sorted
/// here; [`crate::compute_intervals`] sorts each sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinHistory {
    wins: BTreeMap<ProducerName, Vec<i32>>,
}

impl WinHistory {
    pub fn len(&self) -> usize {
        self.wins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }

    pub fn years(&self, producer: &str) -> Option<&[i32]> {
        self.wins.get(producer).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProducerName, &[i32])> {
        self.wins
            .iter()
            .map(|(name, years)| (name, years.as_slice()))
    }

    /// Number of producers with more than one win.
    pub fn repeat_winners(&self) -> usize {
        self.wins.values().filter(|years| years.len() > 1).count()
    }

    fn record_win(mut self, producer: ProducerName, year: i32) -> Self {
        self.wins.entry(producer).or_default().push(year);
        self
    }
}

/// Fold winning records into a [`WinHistory`].
///
/// Precondition: `records` holds winners only. This function does not
/// filter; use [`crate::analyze_award_records`] for unfiltered input.
///
/// A producer named more than once in a single credit gets that record's
/// year once.
pub fn build_history<'a, I>(records: I) -> WinHistory
where
    I: IntoIterator<Item = &'a AwardRecord>,
{
    records.into_iter().fold(WinHistory::default(), |history, record| {
        let producers: BTreeSet<ProducerName> = normalize(&record.producers).into_iter().collect();
        producers
            .into_iter()
            .fold(history, |history, producer| history.record_win(producer, record.year))
    })
}
