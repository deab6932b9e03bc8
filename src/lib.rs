//! In-memory movie metadata store with CSV ingestion and viewing statistics.
//!
//! The repository ingests movie metadata from a bulk CSV source and from
//! JSON payloads, keeps every record in memory keyed by a monotonically
//! increasing record id, and answers two derived queries: per-movie metadata
//! (deduped by language and validated for completeness) and a ranked
//! viewing-statistics report joining a second CSV of watch durations.
//!
//! # Quick Start
//!
//! ```ignore
//! use movie_studio::prelude::*;
//!
//! let repo = MovieRepository::new(
//!     DataSources {
//!         metadata: Some("data/metadata.csv".into()),
//!         stats: Some("data/stats.csv".into()),
//!     },
//!     ResolvePolicy::Oldest,
//! );
//!
//! // First access loads both CSV sources exactly once.
//! let records = repo.get_movie(3)?;
//! let report = repo.get_stats();
//! ```
//!
//! # Modules
//!
//! - [`repo`] - The in-memory repository: CSV parsing, metadata resolution,
//!   stats aggregation (always available)
//! - [`server`] - HTTP API on top of the repository (requires `server`
//!   feature)
//!
//! # Feature Flags
//!
//! - `logging` - Enable library-level tracing (consumers provide their own
//!   subscriber)
//! - `server` - Enable the HTTP API server

mod error;
mod logging;
pub mod prelude;
pub mod repo;
#[cfg(feature = "server")]
pub mod server;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export repository types at crate root for convenience
pub use repo::{DataSources, MovieRecord, MovieRepository, MovieStat, RepoError, ResolvePolicy};
