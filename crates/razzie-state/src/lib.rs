//! Razzie-State: movie list ingestion and persistence
//!
//! Supplies the analytics engine in `razzie-core` with a consistent
//! snapshot of winning records.
//!
//! ## Key Components
//!
//! - `loader`: Parses the semicolon-delimited movie list (`DataLoadError`)
//! - `MovieStore`: Store trait, with `MemoryMovieStore` and
//!   `SurrealMovieStore` implementations
//! - `producer_intervals`: Runs the engine over a store's winners

pub mod analytics;
mod error;
pub mod fakes;
pub mod loader;
mod schema;
pub mod storage_traits;
pub mod surreal_store;

pub use analytics::{producer_intervals, store_stats, StoreStats};
pub use error::{DataLoadError, StorageError};
pub use loader::{load_into, parse_movie_list, read_movie_list, LoadReport};
pub use schema::MovieRecord;
pub use storage_traits::{ContentDigest, MovieStore, StorageResult};
pub use surreal_store::{StoreConfig, SurrealMovieStore};
