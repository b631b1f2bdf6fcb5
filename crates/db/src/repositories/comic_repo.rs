//! Repository for the `comics` table.

use sqlx::{PgPool, Postgres, Transaction};

use multiverse_core::types::{DbId, MarvelId};

use crate::models::comic::{Comic, UpsertComic};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, marvel_id, title, description, isbn, page_count, thumbnail, price, \
     series, publication_date, detail_url, created_at, updated_at";

/// Provides upsert-by-natural-key and lookup operations for comics.
pub struct ComicRepo;

impl ComicRepo {
    /// Create or update a comic keyed by `marvel_id`, returning the row.
    ///
    /// Full overwrite semantics with one asymmetry: `publication_date`
    /// only overwrites when the incoming value is non-null, so a stored
    /// date survives a fetch whose date failed to parse.
    pub async fn upsert(pool: &PgPool, input: &UpsertComic) -> Result<Comic, sqlx::Error> {
        let query = format!("{} RETURNING {COLUMNS}", Self::UPSERT_SQL);
        sqlx::query_as::<_, Comic>(&query)
            .bind(input.marvel_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.isbn)
            .bind(input.page_count)
            .bind(&input.thumbnail)
            .bind(input.price)
            .bind(&input.series)
            .bind(input.publication_date)
            .bind(&input.detail_url)
            .fetch_one(pool)
            .await
    }

    /// Same as [`upsert`](Self::upsert), but within an open transaction.
    pub async fn upsert_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        input: &UpsertComic,
    ) -> Result<Comic, sqlx::Error> {
        let query = format!("{} RETURNING {COLUMNS}", Self::UPSERT_SQL);
        sqlx::query_as::<_, Comic>(&query)
            .bind(input.marvel_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.isbn)
            .bind(input.page_count)
            .bind(&input.thumbnail)
            .bind(input.price)
            .bind(&input.series)
            .bind(input.publication_date)
            .bind(&input.detail_url)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find a comic by its upstream Marvel id.
    pub async fn find_by_marvel_id(
        pool: &PgPool,
        marvel_id: MarvelId,
    ) -> Result<Option<Comic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comics WHERE marvel_id = $1");
        sqlx::query_as::<_, Comic>(&query)
            .bind(marvel_id)
            .fetch_optional(pool)
            .await
    }

    /// List comics linked to a character, oldest link first, capped at
    /// `limit`. Used by the full character projection.
    pub async fn list_for_character(
        pool: &PgPool,
        character_id: DbId,
        limit: i64,
    ) -> Result<Vec<Comic>, sqlx::Error> {
        let query =
            "SELECT c.id, c.marvel_id, c.title, c.description, c.isbn, c.page_count, \
                    c.thumbnail, c.price, c.series, c.publication_date, c.detail_url, \
                    c.created_at, c.updated_at
             FROM comics c
             JOIN character_comics cc ON cc.comic_id = c.id
             WHERE cc.character_id = $1
             ORDER BY cc.id ASC
             LIMIT $2";
        sqlx::query_as::<_, Comic>(query)
            .bind(character_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    const UPSERT_SQL: &'static str = "INSERT INTO comics \
            (marvel_id, title, description, isbn, page_count, thumbnail, price, \
             series, publication_date, detail_url)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         ON CONFLICT (marvel_id) DO UPDATE SET
            title = EXCLUDED.title,
            description = EXCLUDED.description,
            isbn = EXCLUDED.isbn,
            page_count = EXCLUDED.page_count,
            thumbnail = EXCLUDED.thumbnail,
            price = EXCLUDED.price,
            series = EXCLUDED.series,
            publication_date = COALESCE(EXCLUDED.publication_date, comics.publication_date),
            detail_url = EXCLUDED.detail_url,
            updated_at = NOW()";
}
