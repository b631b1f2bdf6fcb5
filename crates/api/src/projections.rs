//! Response projections for persisted Marvel entities.
//!
//! List endpoints return minimal projections to bound payload size; the
//! character detail endpoint returns the full field set plus up to
//! [`FULL_PROJECTION_COMICS`] associated comics rendered minimally.

use chrono::NaiveDate;
use serde::Serialize;

use multiverse_core::types::{DbId, MarvelId, Timestamp};
use multiverse_db::models::character::MarvelCharacter;
use multiverse_db::models::comic::Comic;

/// How many associated comics the full character projection carries.
pub const FULL_PROJECTION_COMICS: i64 = 5;

/// Paged list envelope: total upstream hit count, the page of results,
/// and whether another page exists.
#[derive(Debug, Serialize)]
pub struct Paged<T: Serialize> {
    pub count: i64,
    pub results: Vec<T>,
    pub next: bool,
}

/// Reduced character payload for list endpoints.
#[derive(Debug, Serialize)]
pub struct CharacterMinimal {
    pub id: DbId,
    pub marvel_id: MarvelId,
    pub name: String,
    pub thumbnail: String,
    pub comics_available: i32,
}

impl From<MarvelCharacter> for CharacterMinimal {
    fn from(c: MarvelCharacter) -> Self {
        Self {
            id: c.id,
            marvel_id: c.marvel_id,
            name: c.name,
            thumbnail: c.thumbnail,
            comics_available: c.comics_available,
        }
    }
}

/// Complete character payload, including associated comics.
#[derive(Debug, Serialize)]
pub struct CharacterFull {
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
    pub comics: Vec<ComicMinimal>,
}

impl CharacterFull {
    pub fn new(character: MarvelCharacter, comics: Vec<Comic>) -> Self {
        Self {
            id: character.id,
            marvel_id: character.marvel_id,
            name: character.name,
            description: character.description,
            thumbnail: character.thumbnail,
            comics_available: character.comics_available,
            series_available: character.series_available,
            stories_available: character.stories_available,
            events_available: character.events_available,
            detail_url: character.detail_url,
            created_at: character.created_at,
            updated_at: character.updated_at,
            comics: comics.into_iter().map(ComicMinimal::from).collect(),
        }
    }
}

/// Reduced comic payload for list endpoints and embedded association
/// rendering.
#[derive(Debug, Serialize)]
pub struct ComicMinimal {
    pub id: DbId,
    pub marvel_id: MarvelId,
    pub title: String,
    pub thumbnail: String,
    pub price: f64,
}

impl From<Comic> for ComicMinimal {
    fn from(c: Comic) -> Self {
        Self {
            id: c.id,
            marvel_id: c.marvel_id,
            title: c.title,
            thumbnail: c.thumbnail,
            price: c.price,
        }
    }
}

/// Complete comic payload. The comic row has no associations to embed,
/// so this mirrors the stored fields one-to-one.
#[derive(Debug, Serialize)]
pub struct ComicFull {
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

impl From<Comic> for ComicFull {
    fn from(c: Comic) -> Self {
        Self {
            id: c.id,
            marvel_id: c.marvel_id,
            title: c.title,
            description: c.description,
            isbn: c.isbn,
            page_count: c.page_count,
            thumbnail: c.thumbnail,
            price: c.price,
            series: c.series,
            publication_date: c.publication_date,
            detail_url: c.detail_url,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
