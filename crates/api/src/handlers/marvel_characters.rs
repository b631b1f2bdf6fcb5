//! Handlers for `/marvel/characters`.
//!
//! Every read goes through the upstream API and mirrors the fetched
//! records into local storage before responding (sync-on-read).

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use multiverse_core::pagination::{clamp_limit, clamp_offset, has_more};
use multiverse_core::types::MarvelId;
use multiverse_db::repositories::ComicRepo;

use crate::error::{AppError, AppResult};
use crate::projections::{CharacterFull, CharacterMinimal, Paged, FULL_PROJECTION_COMICS};
use crate::state::AppState;
use crate::sync;

/// How many of a character's comics are fetched and synced on a detail
/// read.
const COMIC_SYNC_LIMIT: i64 = 10;

/// Page size used by the search endpoint.
const SEARCH_LIMIT: i64 = 20;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    #[serde(rename = "nameStartsWith")]
    pub name_starts_with: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

/// GET /api/v1/marvel/characters
///
/// Fetches a page from the upstream, upserts every record, and returns
/// minimal projections with the upstream total driving the `next` flag.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Paged<CharacterMinimal>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);

    let page = state
        .marvel
        .get_characters(limit, offset, params.name_starts_with.as_deref())
        .await?;

    let rows = sync::marvel::sync_characters(&state.pool, &page.results).await?;

    Ok(Json(Paged {
        count: page.total,
        next: has_more(limit, offset, page.total),
        results: rows.into_iter().map(CharacterMinimal::from).collect(),
    }))
}

/// GET /api/v1/marvel/characters/{marvel_id}
///
/// Refresh-or-create: the upstream record is always fetched and
/// upserted, so a never-seen id is created on read. The character's
/// recent comics are synced and linked in the same transaction; the
/// response embeds up to 5 of them.
pub async fn retrieve(
    State(state): State<AppState>,
    Path(marvel_id): Path<MarvelId>,
) -> AppResult<Json<CharacterFull>> {
    let record = state.marvel.get_character(marvel_id).await?;
    let comics = state
        .marvel
        .get_character_comics(marvel_id, COMIC_SYNC_LIMIT)
        .await?;

    let character =
        sync::marvel::sync_character_with_comics(&state.pool, &record, &comics).await?;

    let embedded =
        ComicRepo::list_for_character(&state.pool, character.id, FULL_PROJECTION_COMICS).await?;

    Ok(Json(CharacterFull::new(character, embedded)))
}

/// GET /api/v1/marvel/characters/search?name=
///
/// 400 when `name` is absent or blank; no upstream call is made.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<CharacterMinimal>>> {
    let name = params.name.as_deref().unwrap_or("").trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest(
            "The \"name\" query parameter is required".to_string(),
        ));
    }

    let page = state
        .marvel
        .get_characters(SEARCH_LIMIT, 0, Some(&name))
        .await?;

    let rows = sync::marvel::sync_characters(&state.pool, &page.results).await?;

    Ok(Json(rows.into_iter().map(CharacterMinimal::from).collect()))
}
