//! Data types for the movie repository.

use serde::{Deserialize, Serialize};

/// One piece of movie metadata in one language.
///
/// The record id is not a field of the record; it is the key under which the
/// record lives in the store. Multiple records may exist for the same movie
/// and language over time, and the resolver collapses them at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub movie_id: i64,
    pub title: String,
    pub language: String,
    /// Movie length as free text (e.g. "1:49:00"); never interpreted.
    pub duration: String,
    pub release_year: i32,
}

impl MovieRecord {
    /// A record is complete when every field carries data: non-blank title
    /// and duration, and a non-zero release year. Completeness is a
    /// data-quality check applied at query time, not a stored attribute.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.duration.trim().is_empty()
            && self.release_year != 0
    }
}

/// One entry of the viewing-statistics report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieStat {
    pub movie_id: i64,
    pub title: String,
    /// Mean watch duration in whole seconds, truncated toward zero.
    pub average_watch_duration_s: i64,
    pub watches: u64,
    pub release_year: i32,
}
