//! Unified error type for the movie-studio library.
//!
//! This module provides a single [`Error`] type that encompasses all errors
//! that can occur in the library, making it easier to handle errors in
//! application code.

use thiserror::Error;

use crate::repo::RepoError;

/// Unified error type for all movie-studio operations.
///
/// # Example
///
/// ```ignore
/// use movie_studio::{Result, MovieRepository, DataSources, ResolvePolicy};
///
/// fn do_something(repo: &MovieRepository) -> Result<()> {
///     let records = repo.get_movie(3)?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Error from repository operations.
    #[error(transparent)]
    Repo(#[from] RepoError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a repository error.
    pub fn is_repo(&self) -> bool {
        matches!(self, Self::Repo(_))
    }
}
