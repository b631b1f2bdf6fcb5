//! Comic entity model and upsert DTO.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use multiverse_core::types::{DbId, MarvelId, Timestamp};

/// A comic row from the `comics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comic {
    pub id: DbId,
    pub marvel_id: MarvelId,
    pub title: String,
    pub description: Option<String>,
    pub isbn: String,
    pub page_count: i32,
    pub thumbnail: String,
    pub price: f64,
    pub series: String,
    pub publication_date: Option<NaiveDate>,
    pub detail_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Freshly mapped field set for a comic upsert, keyed by `marvel_id`.
///
/// All fields overwrite the stored row except `publication_date`, which
/// only overwrites when `Some`: a previously stored date survives a
/// fetch whose date fails to parse.
#[derive(Debug, Clone)]
pub struct UpsertComic {
    pub marvel_id: MarvelId,
    pub title: String,
    pub description: Option<String>,
    pub isbn: String,
    pub page_count: i32,
    pub thumbnail: String,
    pub price: f64,
    pub series: String,
    pub publication_date: Option<NaiveDate>,
    pub detail_url: String,
}
