//! Error types for the movie repository.

use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Error, Debug)]
pub enum RepoError {
    /// A required input was missing, blank, or outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input was present but could not be parsed into a metadata record.
    #[error("invalid metadata: {0}")]
    Validation(String),

    /// No valid metadata exists for the movie.
    #[error("no metadata found for movie {0}")]
    NotFound(i64),

    /// A CSV data source could not be read. The lazy loader degrades this
    /// to an empty source; it only surfaces from explicit loads.
    #[error("data source unavailable: {0}")]
    DataSource(String),
}
