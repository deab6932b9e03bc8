//! Common test utilities and fixtures.
//!
//! This module provides shared constants, helper functions, and test fixtures
//! to reduce duplication across the test suite.

#![cfg(feature = "server")]

use axum_test::TestServer;
use movie_studio::server::{router, AppState, Config};
use movie_studio::{DataSources, MovieRepository, ResolvePolicy};
use tempfile::TempDir;

// =============================================================================
// CSV Fixtures
// =============================================================================

/// Metadata source covering the interesting cases: two languages for one
/// movie (3), a duplicate language with a higher record id (7), an
/// incomplete record (9, blank title), and a dropped row with an
/// unparseable year (first row for 11).
pub const METADATA_CSV: &str = "\
Id,MovieId,Title,Language,Duration,ReleaseYear
1,3,Elysium,EN,1:49:00,2013
2,3,Elysium,FR,1:49:00,2013
3,7,Gravity,EN,1:31:00,2013
4,7,Gravity Extended,EN,1:31:00,2013
5,9,,EN,1:30:00,2011
6,11,Oblivion,EN,2:04:00,not-a-year
7,11,Oblivion,EN,2:04:00,2015";

/// Watch-duration source. Movie 3 is watched twice (average 150s); the
/// `junk` row is skipped.
pub const STATS_CSV: &str = "\
MovieId,WatchDurationMs
3,120000
3,180000
7,90000
9,60000
11,45000
junk,99";

/// Highest record id assigned from `METADATA_CSV` (its last line index).
pub const HIGHEST_CSV_RECORD_ID: u64 = 7;

// =============================================================================
// Test Application
// =============================================================================

/// Test application wrapper that serves the real router over CSV fixtures
/// written to a temporary directory.
pub struct TestApp {
    pub server: TestServer,
    _temp_dir: TempDir, // Keep alive for test duration
}

impl TestApp {
    /// App over the standard fixtures with the default (oldest) policy.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_sources(Some(METADATA_CSV), Some(STATS_CSV), ResolvePolicy::Oldest)
    }

    /// App over the standard fixtures resolving to the latest record.
    pub fn latest_policy() -> anyhow::Result<Self> {
        Self::with_sources(Some(METADATA_CSV), Some(STATS_CSV), ResolvePolicy::Latest)
    }

    /// App with no data sources at all.
    pub fn empty() -> anyhow::Result<Self> {
        Self::with_sources(None, None, ResolvePolicy::Oldest)
    }

    /// App over arbitrary CSV text; `None` leaves that source unconfigured.
    pub fn with_sources(
        metadata_csv: Option<&str>,
        stats_csv: Option<&str>,
        policy: ResolvePolicy,
    ) -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;

        let mut sources = DataSources::default();
        if let Some(text) = metadata_csv {
            let path = temp_dir.path().join("metadata.csv");
            std::fs::write(&path, text)?;
            sources.metadata = Some(path);
        }
        if let Some(text) = stats_csv {
            let path = temp_dir.path().join("stats.csv");
            std::fs::write(&path, text)?;
            sources.stats = Some(path);
        }

        let state = AppState::with_repository(MovieRepository::new(sources, policy));
        let server = TestServer::new(router(state))?;
        Ok(Self {
            server,
            _temp_dir: temp_dir,
        })
    }

    /// App built the way the binary does it: from parsed TOML configuration.
    pub fn from_toml(toml: &str) -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let config = Config::from_str(toml)?;
        let state = AppState::from_config(&config);
        let server = TestServer::new(router(state))?;
        Ok(Self {
            server,
            _temp_dir: temp_dir,
        })
    }
}

/// A well-formed save payload for the given movie.
pub fn save_payload(movie_id: i64, title: &str, language: &str) -> String {
    format!(
        r#"{{"movieId":{movie_id},"title":"{title}","language":"{language}","duration":"1:40:00","releaseYear":2016}}"#
    )
}
