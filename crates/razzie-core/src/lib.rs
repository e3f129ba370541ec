//! Razzie Core Library
//!
//! Producer win-interval analytics over Golden Raspberry award lists: which
//! producers have the shortest and the longest gap between two consecutive
//! wins. The engine is pure and synchronous; loading and persistence live
//! in `razzie-state`.

pub mod domain;
pub mod extremes;
pub mod history;
pub mod intervals;
pub mod normalize;
pub mod obs;
pub mod pipeline;
pub mod telemetry;

pub use domain::{AwardRecord, ExtremesResult, IntervalRecord, ProducerName};
pub use extremes::find_extremes;
pub use history::{build_history, WinHistory};
pub use intervals::compute_intervals;
pub use normalize::normalize;
pub use obs::{emit_intervals_computed, emit_load_failed, emit_load_finished, AnalysisSpan};
pub use pipeline::{analyze_award_records, analyze_win_intervals};
pub use telemetry::init_tracing;

/// Razzie version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
