//! In-memory movie metadata repository.
//!
//! This module is the core of the crate: CSV ingestion into normalized
//! records, the dedup/validation rules answering single-movie metadata
//! queries, and the aggregation joining watch durations to metadata for the
//! ranked statistics report.

mod csv;
mod error;
mod resolve;
mod stats;
mod store;
mod types;

pub use csv::{metadata_rows, watch_rows, MetadataRow, WatchRow};
pub use error::RepoError;
pub use resolve::ResolvePolicy;
pub use store::{DataSources, MovieRepository};
pub use types::{MovieRecord, MovieStat};
