//! Marvel character entity model and upsert DTO.

use serde::Serialize;
use sqlx::FromRow;

use multiverse_core::types::{DbId, MarvelId, Timestamp};

/// A character row from the `marvel_characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MarvelCharacter {
    pub id: DbId,
    pub marvel_id: MarvelId,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub comics_available: i32,
    pub series_available: i32,
    pub stories_available: i32,
    pub events_available: i32,
    pub detail_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Freshly mapped field set for a character upsert.
///
/// Every field is written unconditionally: the sync routine has full
/// overwrite semantics, keyed by `marvel_id`.
#[derive(Debug, Clone)]
pub struct UpsertCharacter {
    pub marvel_id: MarvelId,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub comics_available: i32,
    pub series_available: i32,
    pub stories_available: i32,
    pub events_available: i32,
    pub detail_url: String,
}
