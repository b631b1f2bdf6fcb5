//! Handlers for `/marvel/comics`. Same sync-on-read shape as the
//! character handlers, without associations to embed.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use multiverse_core::pagination::{clamp_limit, clamp_offset, has_more};
use multiverse_core::types::MarvelId;
use multiverse_db::repositories::ComicRepo;

use crate::error::{AppError, AppResult};
use crate::projections::{ComicFull, ComicMinimal, Paged};
use crate::state::AppState;
use crate::sync;

/// Page size used by the search endpoint.
const SEARCH_LIMIT: i64 = 20;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    #[serde(rename = "titleStartsWith")]
    pub title_starts_with: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
}

/// GET /api/v1/marvel/comics
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Paged<ComicMinimal>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);

    let page = state
        .marvel
        .get_comics(limit, offset, params.title_starts_with.as_deref())
        .await?;

    let rows = sync::marvel::sync_comics(&state.pool, &page.results).await?;

    Ok(Json(Paged {
        count: page.total,
        next: has_more(limit, offset, page.total),
        results: rows.into_iter().map(ComicMinimal::from).collect(),
    }))
}

/// GET /api/v1/marvel/comics/{marvel_id}
///
/// Refresh-or-create: fetch the upstream record, upsert it, and return
/// the full projection.
pub async fn retrieve(
    State(state): State<AppState>,
    Path(marvel_id): Path<MarvelId>,
) -> AppResult<Json<ComicFull>> {
    let record = state.marvel.get_comic(marvel_id).await?;
    let row = ComicRepo::upsert(&state.pool, &sync::marvel::map_comic(&record)).await?;
    Ok(Json(ComicFull::from(row)))
}

/// GET /api/v1/marvel/comics/search?title=
///
/// 400 when `title` is absent or blank; no upstream call is made.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<ComicMinimal>>> {
    let title = params.title.as_deref().unwrap_or("").trim().to_string();
    if title.is_empty() {
        return Err(AppError::BadRequest(
            "The \"title\" query parameter is required".to_string(),
        ));
    }

    let page = state.marvel.get_comics(SEARCH_LIMIT, 0, Some(&title)).await?;

    let rows = sync::marvel::sync_comics(&state.pool, &page.results).await?;

    Ok(Json(rows.into_iter().map(ComicMinimal::from).collect()))
}
