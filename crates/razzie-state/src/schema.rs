//! Schema definitions for Razzie SurrealDB tables
//!
//! Tables:
//! - movies: One row per nominee of the award list

use chrono::{DateTime, Utc};
use razzie_core::AwardRecord;
use serde::{Deserialize, Serialize};

/// Serializes chrono `DateTime` as a SurrealDB datetime
mod surreal_datetime {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};
    use surrealdb::sql::Datetime as SurrealDatetime;

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let sd = SurrealDatetime::from(*date);
        serde::Serialize::serialize(&sd, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let sd = SurrealDatetime::deserialize(deserializer)?;
        Ok(DateTime::from(sd))
    }
}

/// SurrealQL for the `movies` table. Idempotent.
pub(crate) const MOVIES_SCHEMA: &str = r#"
    DEFINE TABLE IF NOT EXISTS movies SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS year ON movies TYPE int;
    DEFINE FIELD IF NOT EXISTS title ON movies TYPE string;
    DEFINE FIELD IF NOT EXISTS studios ON movies TYPE string;
    DEFINE FIELD IF NOT EXISTS producers ON movies TYPE string;
    DEFINE FIELD IF NOT EXISTS winner ON movies TYPE bool;
    DEFINE FIELD IF NOT EXISTS created_at ON movies TYPE datetime;
    DEFINE INDEX IF NOT EXISTS idx_movie_winner ON movies FIELDS winner;
    DEFINE INDEX IF NOT EXISTS idx_movie_year ON movies FIELDS year;
"#;

/// A stored movie row: the award fields plus the time it was loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub year: i32,
    pub title: String,
    pub studios: String,
    pub producers: String,
    pub winner: bool,
    #[serde(with = "surreal_datetime")]
    pub created_at: DateTime<Utc>,
}

impl MovieRecord {
    pub fn from_award(record: AwardRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            year: record.year,
            title: record.title,
            studios: record.studios,
            producers: record.producers,
            winner: record.winner,
            created_at,
        }
    }

    pub fn into_award(self) -> AwardRecord {
        AwardRecord {
            year: self.year,
            title: self.title,
            studios: self.studios,
            producers: self.producers,
            winner: self.winner,
        }
    }
}
