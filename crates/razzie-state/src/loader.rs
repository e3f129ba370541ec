//! Movie list ingestion.
//!
//! Reads the semicolon-delimited award list
//! (`year;title;studios;producers;winner`) into typed [`AwardRecord`]s and
//! replaces a store's contents with them.
//!
//! Columns are located by header name, so their order may vary and extra
//! columns are ignored. Fields may be wrapped in double quotes, which is how
//! a value carries a literal `;`.

use std::path::Path;

use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};
use razzie_core::{emit_load_failed, emit_load_finished, AwardRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::error::DataLoadError;
use crate::storage_traits::{ContentDigest, MovieStore};

const DELIMITER: u8 = b';';

/// Summary of one load into a store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    pub batch_id: Uuid,
    pub source: String,
    pub source_digest: ContentDigest,
    pub total: usize,
    pub winners: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Column positions resolved from the header row.
#[derive(Debug)]
struct ColumnLayout {
    year: usize,
    title: usize,
    studios: usize,
    producers: usize,
    winner: Option<usize>,
}

impl ColumnLayout {
    fn from_header(header: &StringRecord) -> Result<Self, DataLoadError> {
        let names: Vec<String> = header.iter().map(|name| name.to_ascii_lowercase()).collect();
        let position = |column: &str| names.iter().position(|name| name == column);
        let required = |column: &'static str| {
            position(column).ok_or(DataLoadError::MissingColumn { column })
        };

        Ok(Self {
            year: required("year")?,
            title: required("title")?,
            studios: required("studios")?,
            producers: required("producers")?,
            winner: position("winner"),
        })
    }

    fn parse_row(&self, line: usize, row: &StringRecord) -> Result<AwardRecord, DataLoadError> {
        let field = |index: usize, column: &'static str| {
            row.get(index)
                .ok_or(DataLoadError::MissingField { line, column })
        };

        let year_raw = field(self.year, "year")?;
        let year = year_raw
            .parse::<i32>()
            .map_err(|_| DataLoadError::InvalidYear {
                line,
                value: year_raw.to_string(),
            })?;

        // Anything but "yes" (including an absent trailing field) is a loss.
        let winner = self
            .winner
            .and_then(|index| row.get(index))
            .map(|value| value.eq_ignore_ascii_case("yes"))
            .unwrap_or(false);

        Ok(AwardRecord {
            year,
            title: field(self.title, "title")?.to_string(),
            studios: field(self.studios, "studios")?.to_string(),
            producers: field(self.producers, "producers")?.to_string(),
            winner,
        })
    }
}

/// Parse a movie list held in memory.
///
/// A leading UTF-8 BOM is ignored, as are blank lines. CRLF line endings
/// are accepted.
pub fn parse_movie_list(input: &str) -> Result<Vec<AwardRecord>, DataLoadError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    if input.trim().is_empty() {
        return Err(DataLoadError::EmptySource);
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input.as_bytes());

    let layout = ColumnLayout::from_header(reader.headers()?)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        // Whitespace-only lines come through as a single empty field.
        if row.iter().all(str::is_empty) {
            continue;
        }
        let line = row.position().map(|pos| pos.line() as usize).unwrap_or(0);
        records.push(layout.parse_row(line, &row)?);
    }
    Ok(records)
}

/// Read and parse a movie list file, returning the records and the
/// SHA-256 digest of the file contents.
///
/// The file must be valid UTF-8.
pub fn read_movie_list(path: &Path) -> Result<(Vec<AwardRecord>, ContentDigest), DataLoadError> {
    let bytes = std::fs::read(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let digest = ContentDigest::from_bytes(&bytes);
    let text = std::str::from_utf8(&bytes).map_err(|source| DataLoadError::InvalidEncoding {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_movie_list(text)?;
    debug!(records = records.len(), digest = %digest.short(), "Movie list parsed");
    Ok((records, digest))
}

/// Replace the contents of `store` with the movie list at `path`.
#[instrument(skip(store, path), fields(path = %path.display()))]
pub async fn load_into(store: &dyn MovieStore, path: &Path) -> Result<LoadReport, DataLoadError> {
    let source = path.display().to_string();
    match load(store, path, &source).await {
        Ok(report) => {
            emit_load_finished(&report.source, report.total, report.winners);
            Ok(report)
        }
        Err(err) => {
            emit_load_failed(&source, &err);
            Err(err)
        }
    }
}

async fn load(
    store: &dyn MovieStore,
    path: &Path,
    source: &str,
) -> Result<LoadReport, DataLoadError> {
    info!("Loading movie list");
    let (records, source_digest) = read_movie_list(path)?;

    let total = store.replace_all(records).await?;
    let winners = store.count_winners().await?;

    Ok(LoadReport {
        batch_id: Uuid::new_v4(),
        source: source.to_string(),
        source_digest,
        total,
        winners,
        loaded_at: Utc::now(),
    })
}
