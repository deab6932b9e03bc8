//! The in-memory movie repository.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use dashmap::DashMap;

use crate::logging;

use super::csv;
use super::error::RepoError;
use super::resolve::{self, ResolvePolicy};
use super::stats;
use super::types::{MovieRecord, MovieStat};

/// Locations of the two CSV sources.
///
/// Either may be absent, and a configured file may legitimately not exist
/// yet; both cases load as an empty source.
#[derive(Debug, Clone, Default)]
pub struct DataSources {
    pub metadata: Option<PathBuf>,
    pub stats: Option<PathBuf>,
}

/// In-memory movie metadata store and watch-duration index.
///
/// Both collections are populated exactly once, lazily, on the first call to
/// any operation, then only ever appended to by [`save`](Self::save). The
/// repository is safe to share across concurrent requests: the collections
/// support concurrent insert-and-iterate and id assignment is atomic.
pub struct MovieRepository {
    sources: DataSources,
    policy: ResolvePolicy,
    /// Metadata records keyed by record id. Several records may exist per
    /// movie and language; the resolver collapses them at query time.
    records: DashMap<u64, MovieRecord>,
    /// Watch durations in milliseconds per movie, in source order.
    watch_index: DashMap<i64, Vec<i64>>,
    /// Next record id handed out by `save`.
    next_id: AtomicU64,
    loaded: OnceLock<()>,
}

impl MovieRepository {
    /// Create an empty repository over the given sources. Nothing is read
    /// until the first operation.
    pub fn new(sources: DataSources, policy: ResolvePolicy) -> Self {
        Self {
            sources,
            policy,
            records: DashMap::new(),
            watch_index: DashMap::new(),
            next_id: AtomicU64::new(0),
            loaded: OnceLock::new(),
        }
    }

    /// Repository populated from in-memory CSV text, bypassing file I/O.
    pub fn from_csv(metadata_csv: &str, stats_csv: &str, policy: ResolvePolicy) -> Self {
        let repo = Self::new(DataSources::default(), policy);
        repo.populate(Some(metadata_csv), Some(stats_csv));
        let _ = repo.loaded.set(());
        repo
    }

    /// Insert one metadata record from a raw JSON payload.
    ///
    /// A blank payload is an invalid argument; a non-blank payload that does
    /// not deserialize into a metadata record is a validation failure.
    /// Returns the newly assigned record id; concurrent saves each receive a
    /// distinct, strictly increasing id.
    pub fn save(&self, payload: &str) -> Result<u64, RepoError> {
        self.ensure_loaded();

        if payload.trim().is_empty() {
            return Err(RepoError::InvalidArgument(
                "empty metadata payload".to_string(),
            ));
        }

        let record: MovieRecord =
            serde_json::from_str(payload).map_err(|e| RepoError::Validation(e.to_string()))?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.records.insert(id, record);
        logging::debug!(record_id = id, "metadata record saved");
        Ok(id)
    }

    /// All metadata records for a movie, deduped by language with the lowest
    /// record id winning. This is the lookup the stats report consumes; it
    /// applies no completeness filtering.
    pub fn find_by_movie_id(&self, movie_id: i64) -> Result<Vec<MovieRecord>, RepoError> {
        if movie_id <= 0 {
            return Err(RepoError::InvalidArgument(format!(
                "invalid movie id: {movie_id}"
            )));
        }
        self.ensure_loaded();
        Ok(resolve::dedup_by_language(self.records_for(movie_id)))
    }

    /// The valid metadata for a movie: one record per language per the
    /// configured [`ResolvePolicy`], incomplete records dropped, sorted
    /// ascending by language. `NotFound` when nothing survives.
    pub fn get_movie(&self, movie_id: i64) -> Result<Vec<MovieRecord>, RepoError> {
        if movie_id <= 0 {
            return Err(RepoError::InvalidArgument(format!(
                "invalid movie id: {movie_id}"
            )));
        }
        self.ensure_loaded();

        let resolved = resolve::resolve_movie(self.records_for(movie_id), self.policy);
        if resolved.is_empty() {
            return Err(RepoError::NotFound(movie_id));
        }
        Ok(resolved)
    }

    /// The ranked viewing-statistics report: most watched first, newer
    /// releases breaking ties, one entry per surviving language variant.
    pub fn get_stats(&self) -> Vec<MovieStat> {
        self.ensure_loaded();

        let watches: Vec<(i64, Vec<i64>)> = self
            .watch_index
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        stats::aggregate(watches, |movie_id| {
            resolve::dedup_by_language(self.records_for(movie_id))
        })
    }

    /// Eagerly run the one-time load, reporting source errors that the lazy
    /// path only logs. Idempotent; later calls do nothing.
    pub fn load(&self) -> Result<(), RepoError> {
        let mut outcome = Ok(());
        self.loaded.get_or_init(|| outcome = self.populate_from_sources());
        outcome
    }

    /// Number of metadata records currently held.
    pub fn record_count(&self) -> usize {
        self.ensure_loaded();
        self.records.len()
    }

    fn ensure_loaded(&self) {
        // Source failures are logged where they occur; lazy access degrades
        // to empty collections rather than failing the operation.
        let _ = self.load();
    }

    fn populate_from_sources(&self) -> Result<(), RepoError> {
        let mut first_error = None;
        let metadata = self.read_source(self.sources.metadata.as_deref(), &mut first_error);
        let stats = self.read_source(self.sources.stats.as_deref(), &mut first_error);
        self.populate(metadata.as_deref(), stats.as_deref());
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn read_source(
        &self,
        path: Option<&Path>,
        first_error: &mut Option<RepoError>,
    ) -> Option<String> {
        let path = path?;
        if !path.exists() {
            return None;
        }
        match std::fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(err) => {
                let message = format!("{}: {err}", path.display());
                logging::warn!(source = %message, "csv source unreadable, loading empty");
                first_error.get_or_insert(RepoError::DataSource(message));
                None
            }
        }
    }

    fn populate(&self, metadata_csv: Option<&str>, stats_csv: Option<&str>) {
        let mut highest_id = None;
        if let Some(text) = metadata_csv {
            for row in csv::metadata_rows(text) {
                highest_id = highest_id.max(Some(row.line));
                self.records.insert(row.line, row.record);
            }
        }
        // Seed past the highest loaded id. Skipped rows leave gaps, so the
        // store size alone could collide with a loaded id.
        self.next_id
            .store(highest_id.map_or(0, |id| id + 1), Ordering::SeqCst);

        if let Some(text) = stats_csv {
            for row in csv::watch_rows(text) {
                self.watch_index
                    .entry(row.movie_id)
                    .or_default()
                    .push(row.duration_ms);
            }
        }

        logging::info!(
            records = self.records.len(),
            watched_movies = self.watch_index.len(),
            "csv sources loaded"
        );
    }

    fn records_for(&self, movie_id: i64) -> Vec<(u64, MovieRecord)> {
        self.records
            .iter()
            .filter(|entry| entry.value().movie_id == movie_id)
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METADATA: &str = "\
Id,MovieId,Title,Language,Duration,ReleaseYear
1,3,Elysium,EN,1:49:00,2013
2,3,Elysium,FR,1:49:00,2013
3,3,Elysium Redux,EN,1:49:00,2014";

    const STATS: &str = "\
MovieId,WatchDurationMs
3,120000
3,180000";

    #[test]
    fn save_assigns_increasing_ids() {
        let repo = MovieRepository::from_csv(METADATA, STATS, ResolvePolicy::Oldest);
        let payload = r#"{"movieId":5,"title":"Gravity","language":"EN","duration":"1:31:00","releaseYear":2013}"#;
        // Highest CSV record id is 3, so saves continue from 4.
        assert_eq!(repo.save(payload).unwrap(), 4);
        assert_eq!(repo.save(payload).unwrap(), 5);
    }

    #[test]
    fn save_rejects_blank_payload() {
        let repo = MovieRepository::from_csv("", "", ResolvePolicy::Oldest);
        assert!(matches!(
            repo.save("   "),
            Err(RepoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn save_rejects_malformed_payload() {
        let repo = MovieRepository::from_csv("", "", ResolvePolicy::Oldest);
        assert!(matches!(repo.save(r#"{"x":1"#), Err(RepoError::Validation(_))));
        assert!(matches!(
            repo.save(r#"{"movieId":5}"#),
            Err(RepoError::Validation(_))
        ));
    }

    #[test]
    fn find_by_movie_id_dedups_languages() {
        let repo = MovieRepository::from_csv(METADATA, STATS, ResolvePolicy::Oldest);
        let records = repo.find_by_movie_id(3).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Elysium");
    }

    #[test]
    fn find_by_movie_id_rejects_non_positive_ids() {
        let repo = MovieRepository::from_csv(METADATA, STATS, ResolvePolicy::Oldest);
        assert!(matches!(
            repo.find_by_movie_id(0),
            Err(RepoError::InvalidArgument(_))
        ));
        assert!(matches!(
            repo.find_by_movie_id(-7),
            Err(RepoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn get_movie_not_found_for_unknown_id() {
        let repo = MovieRepository::from_csv(METADATA, STATS, ResolvePolicy::Oldest);
        assert!(matches!(repo.get_movie(999), Err(RepoError::NotFound(999))));
    }

    #[test]
    fn get_stats_elysium_example() {
        let repo = MovieRepository::from_csv(METADATA, STATS, ResolvePolicy::Oldest);
        let report = repo.get_stats();
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].watches, 2);
        assert_eq!(report[0].average_watch_duration_s, 150);
    }

    #[test]
    fn missing_sources_load_empty() {
        let repo = MovieRepository::new(
            DataSources {
                metadata: Some(PathBuf::from("/nonexistent/metadata.csv")),
                stats: Some(PathBuf::from("/nonexistent/stats.csv")),
            },
            ResolvePolicy::Oldest,
        );
        assert!(repo.load().is_ok());
        assert!(repo.get_stats().is_empty());
        assert!(repo.find_by_movie_id(1).unwrap().is_empty());
    }
}
