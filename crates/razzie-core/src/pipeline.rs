//! End-to-end producer interval analysis.
//!
//! Composes [`build_history`] → [`compute_intervals`] → [`find_extremes`].
//! Every call builds its own intermediate state, so concurrent callers
//! sharing one record snapshot need no locking.

use tracing::debug;

use crate::domain::{AwardRecord, ExtremesResult};
use crate::extremes::find_extremes;
use crate::history::build_history;
use crate::intervals::compute_intervals;
use crate::obs::{emit_intervals_computed, AnalysisSpan};

/// Analyze a set of winning records.
///
/// Precondition: every record has `winner == true`. Records are not
/// re-filtered; see [`analyze_award_records`] for mixed input.
pub fn analyze_win_intervals(winners: &[AwardRecord]) -> ExtremesResult {
    let _span = AnalysisSpan::enter(winners.len());

    let history = build_history(winners);
    debug!(producers = history.len(), "win history built");

    let intervals = compute_intervals(&history);
    let result = find_extremes(&intervals);

    emit_intervals_computed(
        history.len(),
        history.repeat_winners(),
        intervals.len(),
        result.min_interval(),
        result.max_interval(),
    );
    result
}

/// Analyze an unfiltered award list, keeping only winners first.
pub fn analyze_award_records(records: &[AwardRecord]) -> ExtremesResult {
    let winners: Vec<AwardRecord> = records.iter().filter(|r| r.winner).cloned().collect();
    debug!(
        total = records.len(),
        winners = winners.len(),
        "filtered award list to winners"
    );
    analyze_win_intervals(&winners)
}
