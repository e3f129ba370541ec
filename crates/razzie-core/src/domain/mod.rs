//! Domain models for Razzie.
//!
//! Canonical definitions for the core entities:
//! - `AwardRecord`: One nominee row of the award list (immutable input)
//! - `ProducerName`: A single, trimmed producer credit
//! - `IntervalRecord`: Gap between two consecutive wins of one producer
//! - `ExtremesResult`: Records at the global minimum and maximum gap

pub mod award;
pub mod interval;

pub use award::{AwardRecord, ProducerName};
pub use interval::{ExtremesResult, IntervalRecord};
