//! Field mapping and upsert synchronization for the Marvel domain.
//!
//! The mappers are total over well-formed records: missing optional
//! upstream fields map to empty strings, zeros, or `None` rather than
//! failing. Sync routines are idempotent: re-running with identical
//! input leaves the entity and association sets unchanged.

use sqlx::PgPool;

use multiverse_db::models::character::{MarvelCharacter, UpsertCharacter};
use multiverse_db::models::comic::{Comic, UpsertComic};
use multiverse_db::repositories::{CharacterComicRepo, CharacterRepo, ComicRepo};
use multiverse_remote::marvel::types::{CharacterRecord, ComicRecord};

/// Map a remote character record into the local field set.
pub fn map_character(record: &CharacterRecord) -> UpsertCharacter {
    UpsertCharacter {
        marvel_id: record.id,
        name: record.name.clone(),
        description: record.description.clone().unwrap_or_default(),
        thumbnail: record.thumbnail_url(),
        comics_available: record.comics.available,
        series_available: record.series.available,
        stories_available: record.stories.available,
        events_available: record.events.available,
        detail_url: record.detail_url(),
    }
}

/// Map a remote comic record into the local field set.
pub fn map_comic(record: &ComicRecord) -> UpsertComic {
    UpsertComic {
        marvel_id: record.id,
        title: record.title.clone(),
        description: record.description.clone(),
        isbn: record.isbn.clone().unwrap_or_default(),
        page_count: record.page_count,
        thumbnail: record.thumbnail_url(),
        price: record.print_price(),
        series: record.series_name(),
        publication_date: record.onsale_date(),
        detail_url: record.detail_url(),
    }
}

/// Upsert each character record in input order, returning rows in that
/// same order.
pub async fn sync_characters(
    pool: &PgPool,
    records: &[CharacterRecord],
) -> Result<Vec<MarvelCharacter>, sqlx::Error> {
    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        rows.push(CharacterRepo::upsert(pool, &map_character(record)).await?);
    }
    Ok(rows)
}

/// Upsert each comic record in input order, returning rows in that same
/// order.
pub async fn sync_comics(pool: &PgPool, records: &[ComicRecord]) -> Result<Vec<Comic>, sqlx::Error> {
    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        rows.push(ComicRepo::upsert(pool, &map_comic(record)).await?);
    }
    Ok(rows)
}

/// Upsert a character together with its comics and the character-comic
/// links, all inside one transaction: a failure partway through leaves
/// no half-synced state.
pub async fn sync_character_with_comics(
    pool: &PgPool,
    character: &CharacterRecord,
    comics: &[ComicRecord],
) -> Result<MarvelCharacter, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let row = CharacterRepo::upsert_in_tx(&mut tx, &map_character(character)).await?;
    for record in comics {
        let comic = ComicRepo::upsert_in_tx(&mut tx, &map_comic(record)).await?;
        CharacterComicRepo::link_in_tx(&mut tx, row.id, comic.id).await?;
    }

    tx.commit().await?;
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_character_defaults_missing_optionals() {
        let record: CharacterRecord = serde_json::from_value(serde_json::json!({
            "id": 1011334,
            "name": "3-D Man",
        }))
        .unwrap();

        let fields = map_character(&record);
        assert_eq!(fields.marvel_id, 1011334);
        assert_eq!(fields.description, "");
        assert_eq!(fields.thumbnail, "");
        assert_eq!(fields.comics_available, 0);
        assert_eq!(fields.detail_url, "");
    }

    #[test]
    fn map_character_extracts_counters_and_urls() {
        let record: CharacterRecord = serde_json::from_value(serde_json::json!({
            "id": 1009610,
            "name": "Spider-Man",
            "description": "Bitten by a radioactive spider",
            "thumbnail": {"path": "http://i.example/spidey", "extension": "jpg"},
            "comics": {"available": 4043},
            "series": {"available": 1134},
            "stories": {"available": 6112},
            "events": {"available": 39},
            "urls": [{"type": "detail", "url": "http://marvel.example/spider-man"}],
        }))
        .unwrap();

        let fields = map_character(&record);
        assert_eq!(fields.thumbnail, "http://i.example/spidey.jpg");
        assert_eq!(fields.comics_available, 4043);
        assert_eq!(fields.events_available, 39);
        assert_eq!(fields.detail_url, "http://marvel.example/spider-man");
    }

    #[test]
    fn map_comic_defaults_and_extracts() {
        let record: ComicRecord = serde_json::from_value(serde_json::json!({
            "id": 428,
            "title": "Amazing Fantasy #15",
            "pageCount": 32,
            "prices": [{"type": "printPrice", "price": 0.12}],
            "dates": [{"type": "onsaleDate", "date": "1962-08-01T00:00:00-0400"}],
            "series": {"name": "Amazing Fantasy"},
        }))
        .unwrap();

        let fields = map_comic(&record);
        assert_eq!(fields.marvel_id, 428);
        assert_eq!(fields.description, None);
        assert_eq!(fields.isbn, "");
        assert_eq!(fields.page_count, 32);
        assert_eq!(fields.price, 0.12);
        assert_eq!(fields.series, "Amazing Fantasy");
        assert_eq!(
            fields.publication_date,
            chrono::NaiveDate::from_ymd_opt(1962, 8, 1)
        );
    }

    #[test]
    fn map_comic_unparsable_date_stays_unset() {
        let record: ComicRecord = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "T",
            "dates": [{"type": "onsaleDate", "date": "-0001-11-30T00:00:00-0500"}],
        }))
        .unwrap();

        let fields = map_comic(&record);
        assert_eq!(fields.publication_date, None);
        assert_eq!(fields.price, 0.0);
    }
}
