//! Application state management.

use std::sync::Arc;

use crate::repo::MovieRepository;

use super::config::Config;

/// Shared application state: one repository instance, explicitly owned and
/// threaded to every handler.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<MovieRepository>,
}

impl AppState {
    /// Create a new AppState from configuration. The repository reads its
    /// CSV sources lazily on first request.
    pub fn from_config(config: &Config) -> Self {
        let repository =
            MovieRepository::new(config.data.sources(), config.repository.resolve);
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Wrap an existing repository.
    pub fn with_repository(repository: MovieRepository) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// The shared repository.
    pub fn repository(&self) -> &MovieRepository {
        &self.repository
    }
}
