//! API routes and handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::repo::{MovieRecord, MovieStat};

use super::{error::ApiError, state::AppState};

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/movies", post(save_metadata))
        .route("/api/v1/movies/{movie_id}", get(get_movie))
        .route("/api/v1/stats", get(get_stats))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Response body for a successful save.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    /// The newly assigned record id.
    pub id: u64,
}

/// Save one metadata record. The request body is the raw JSON payload.
pub async fn save_metadata(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<SaveResponse>), ApiError> {
    let id = state.repository().save(&body)?;
    Ok((StatusCode::CREATED, Json(SaveResponse { id })))
}

/// All valid metadata for one movie, one record per language, sorted by
/// language. 404 when no complete record exists.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> Result<Json<Vec<MovieRecord>>, ApiError> {
    let records = state.repository().get_movie(movie_id)?;
    Ok(Json(records))
}

/// The ranked viewing-statistics report.
pub async fn get_stats(State(state): State<AppState>) -> Json<Vec<MovieStat>> {
    Json(state.repository().get_stats())
}
