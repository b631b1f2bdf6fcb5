//! Handlers for `/rickandmorty`. Pure relay: upstream payloads are
//! forwarded verbatim, and an upstream 404 surfaces as a local 404.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

impl PageParams {
    fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }
}

/// GET /api/v1/rickandmorty/characters
pub async fn list_characters(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<serde_json::Value>> {
    Ok(Json(state.rickandmorty.characters(params.page()).await?))
}

/// GET /api/v1/rickandmorty/characters/{id}
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    Ok(Json(state.rickandmorty.character(id).await?))
}

/// GET /api/v1/rickandmorty/locations
pub async fn list_locations(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<serde_json::Value>> {
    Ok(Json(state.rickandmorty.locations(params.page()).await?))
}

/// GET /api/v1/rickandmorty/locations/{id}
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    Ok(Json(state.rickandmorty.location(id).await?))
}

/// GET /api/v1/rickandmorty/episodes
pub async fn list_episodes(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<serde_json::Value>> {
    Ok(Json(state.rickandmorty.episodes(params.page()).await?))
}

/// GET /api/v1/rickandmorty/episodes/{id}
pub async fn get_episode(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    Ok(Json(state.rickandmorty.episode(id).await?))
}
