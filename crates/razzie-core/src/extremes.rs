//! Global minimum / maximum gap reduction.

use crate::domain::{ExtremesResult, IntervalRecord};

/// Collect every record at the global minimum gap and every record at the
/// global maximum gap.
///
/// Ties are all kept, in input order. With a single distinct gap value both
/// lists hold the same records. Empty input gives an empty result.
pub fn find_extremes(intervals: &[IntervalRecord]) -> ExtremesResult {
    let Some((min_value, max_value)) = intervals.iter().fold(None, |bounds, r| match bounds {
        None => Some((r.interval, r.interval)),
        Some((lo, hi)) => Some((r.interval.min(lo), r.interval.max(hi))),
    }) else {
        return ExtremesResult::default();
    };

    let at = |value: i32| -> Vec<IntervalRecord> {
        intervals
            .iter()
            .filter(|r| r.interval == value)
            .cloned()
            .collect()
    };

    ExtremesResult {
        min: at(min_value),
        max: at(max_value),
    }
}
