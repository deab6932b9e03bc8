//! HTTP API server for movie-studio.
//!
//! This module provides an HTTP API on top of the movie repository using
//! axum: saving metadata records, querying a movie's metadata, and the
//! viewing-statistics report.

mod config;
mod error;
mod logging;
mod routes;
mod state;

pub use config::{
    Config, ConfigError, DataConfig, LogFormat, LoggingConfig, RepositoryConfig, ServerConfig,
};
pub use error::ApiError;
pub use logging::{init as init_logging, LoggingError};
pub use routes::{router, SaveResponse};
pub use state::AppState;
