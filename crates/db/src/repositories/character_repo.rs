//! Repository for the `marvel_characters` table.

use sqlx::{PgPool, Postgres, Transaction};

use multiverse_core::types::MarvelId;

use crate::models::character::{MarvelCharacter, UpsertCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, marvel_id, name, description, thumbnail, comics_available, \
     series_available, stories_available, events_available, detail_url, created_at, updated_at";

/// Provides upsert-by-natural-key and lookup operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Create or update a character keyed by `marvel_id`, returning the row.
    ///
    /// Every mutable field is overwritten from `input` (full overwrite
    /// semantics); `updated_at` is refreshed. Racing inserts for the same
    /// `marvel_id` are resolved silently by `ON CONFLICT`.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertCharacter,
    ) -> Result<MarvelCharacter, sqlx::Error> {
        let query = format!("{} RETURNING {COLUMNS}", Self::UPSERT_SQL);
        sqlx::query_as::<_, MarvelCharacter>(&query)
            .bind(input.marvel_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.thumbnail)
            .bind(input.comics_available)
            .bind(input.series_available)
            .bind(input.stories_available)
            .bind(input.events_available)
            .bind(&input.detail_url)
            .fetch_one(pool)
            .await
    }

    /// Same as [`upsert`](Self::upsert), but within an open transaction.
    pub async fn upsert_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        input: &UpsertCharacter,
    ) -> Result<MarvelCharacter, sqlx::Error> {
        let query = format!("{} RETURNING {COLUMNS}", Self::UPSERT_SQL);
        sqlx::query_as::<_, MarvelCharacter>(&query)
            .bind(input.marvel_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.thumbnail)
            .bind(input.comics_available)
            .bind(input.series_available)
            .bind(input.stories_available)
            .bind(input.events_available)
            .bind(&input.detail_url)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find a character by its upstream Marvel id.
    pub async fn find_by_marvel_id(
        pool: &PgPool,
        marvel_id: MarvelId,
    ) -> Result<Option<MarvelCharacter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marvel_characters WHERE marvel_id = $1");
        sqlx::query_as::<_, MarvelCharacter>(&query)
            .bind(marvel_id)
            .fetch_optional(pool)
            .await
    }

    const UPSERT_SQL: &'static str = "INSERT INTO marvel_characters \
            (marvel_id, name, description, thumbnail, comics_available, \
             series_available, stories_available, events_available, detail_url)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         ON CONFLICT (marvel_id) DO UPDATE SET
            name = EXCLUDED.name,
            description = EXCLUDED.description,
            thumbnail = EXCLUDED.thumbnail,
            comics_available = EXCLUDED.comics_available,
            series_available = EXCLUDED.series_available,
            stories_available = EXCLUDED.stories_available,
            events_available = EXCLUDED.events_available,
            detail_url = EXCLUDED.detail_url,
            updated_at = NOW()";
}
