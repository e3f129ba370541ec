//! Storage trait definitions for Razzie
//!
//! - `MovieStore`: holds the current award list and serves the winner
//!   snapshot handed to the analytics engine.
//!
//! Traits are async and backend-agnostic. An in-memory fake lives in the
//! `fakes` module.

use async_trait::async_trait;
use razzie_core::AwardRecord;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::StorageError;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// SHA-256 digest of a loaded source, as lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest(String);

impl ContentDigest {
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        ContentDigest(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form (first 12 hex chars).
    pub fn short(&self) -> &str {
        &self.0[..12.min(self.0.len())]
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Store for the award list.
///
/// Guarantees:
/// - `replace_all` leaves exactly the given records in the store.
/// - `winners` returns an owned snapshot, ordered by year ascending.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Drop every stored record, insert `records`, return the inserted count.
    async fn replace_all(&self, records: Vec<AwardRecord>) -> StorageResult<usize>;

    /// Winning records ordered by year ascending.
    async fn winners(&self) -> StorageResult<Vec<AwardRecord>>;

    /// Number of stored records.
    async fn count(&self) -> StorageResult<usize>;

    /// Number of stored winning records.
    async fn count_winners(&self) -> StorageResult<usize>;
}
