//! Consecutive-win gap calculation.

use crate::domain::IntervalRecord;
use crate::history::WinHistory;

/// Turn every producer's win years into consecutive-win gap records.
///
/// Each sequence is sorted ascending first; a producer with `k` wins
/// yields `k - 1` records, in chronological order. Two wins in the same
/// year yield a zero-length gap. Producers are visited in name order.
pub fn compute_intervals(history: &WinHistory) -> Vec<IntervalRecord> {
    history
        .iter()
        .filter(|(_, years)| years.len() > 1)
        .flat_map(|(producer, years)| {
            let mut sorted = years.to_vec();
            sorted.sort_unstable();
            sorted
                .windows(2)
                .map(|pair| IntervalRecord::between(producer.clone(), pair[0], pair[1]))
                .collect::<Vec<_>>()
        })
        .collect()
}
