//! In-memory fakes for storage traits (testing only)
//!
//! `MemoryMovieStore` satisfies the `MovieStore` contract without any
//! external dependencies.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use razzie_core::AwardRecord;

use crate::schema::MovieRecord;
use crate::storage_traits::{MovieStore, StorageResult};

/// In-memory movie store backed by a `Vec<MovieRecord>`.
#[derive(Debug, Default)]
pub struct MemoryMovieStore {
    movies: Mutex<Vec<MovieRecord>>,
}

impl MemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieStore for MemoryMovieStore {
    async fn replace_all(&self, records: Vec<AwardRecord>) -> StorageResult<usize> {
        let now = Utc::now();
        let fresh: Vec<MovieRecord> = records
            .into_iter()
            .map(|r| MovieRecord::from_award(r, now))
            .collect();
        let inserted = fresh.len();
        *self.movies.lock().unwrap() = fresh;
        Ok(inserted)
    }

    async fn winners(&self) -> StorageResult<Vec<AwardRecord>> {
        let movies = self.movies.lock().unwrap();
        let mut winners: Vec<AwardRecord> = movies
            .iter()
            .filter(|m| m.winner)
            .cloned()
            .map(MovieRecord::into_award)
            .collect();
        winners.sort_by_key(|r| r.year);
        Ok(winners)
    }

    async fn count(&self) -> StorageResult<usize> {
        Ok(self.movies.lock().unwrap().len())
    }

    async fn count_winners(&self) -> StorageResult<usize> {
        Ok(self.movies.lock().unwrap().iter().filter(|m| m.winner).count())
    }
}
