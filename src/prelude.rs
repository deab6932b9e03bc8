//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring all commonly used types
//! into scope.
//!
//! # Example
//!
//! ```ignore
//! use movie_studio::prelude::*;
//!
//! let repo = MovieRepository::new(DataSources::default(), ResolvePolicy::Oldest);
//! let id = repo.save(r#"{"movieId":3,"title":"Elysium","language":"EN","duration":"1:49:00","releaseYear":2013}"#)?;
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Repository types
pub use crate::repo::{
    DataSources, MovieRecord, MovieRepository, MovieStat, RepoError, ResolvePolicy,
};
