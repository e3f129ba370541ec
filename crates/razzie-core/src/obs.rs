//! Structured observability hooks for load and analysis events.
//!
//! Events are emitted at `info!` level (`warn!` for failures) with a stable
//! `event` field so log pipelines can filter on it.

use tracing::info;

/// RAII guard that enters an analysis-scoped span.
///
/// # Example
///
/// ```ignore
/// let _span = AnalysisSpan::enter(records.len());
/// // tracing calls below carry `records = ...`
/// ```
pub struct AnalysisSpan {
    _span: tracing::span::EnteredSpan,
}

impl AnalysisSpan {
    pub fn enter(records: usize) -> Self {
        let span = tracing::info_span!("razzie.analysis", records = records);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: a movie list was loaded into a store.
pub fn emit_load_finished(source: &str, total: usize, winners: usize) {
    info!(
        event = "load.finished",
        source = %source,
        total = total,
        winners = winners,
    );
}

/// Emit event: loading a movie list failed (warning level).
pub fn emit_load_failed(source: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(event = "load.failed", source = %source, error = %error);
}

/// Emit event: intervals computed, with population and extreme values.
pub fn emit_intervals_computed(
    producers: usize,
    repeat_winners: usize,
    intervals: usize,
    min_interval: Option<i32>,
    max_interval: Option<i32>,
) {
    info!(
        event = "intervals.computed",
        producers = producers,
        repeat_winners = repeat_winners,
        intervals = intervals,
        min_interval = ?min_interval,
        max_interval = ?max_interval,
    );
}
