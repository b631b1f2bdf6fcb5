//! Repository for the `character_comics` join table.
//!
//! Links are stored directionally (character → comic) but are logically
//! symmetric: the reverse duplicate is never written because every link
//! originates from a character sync. `ON CONFLICT DO NOTHING` makes link
//! creation idempotent.

use sqlx::{PgPool, Postgres, Transaction};

use multiverse_core::types::DbId;

/// Provides create-if-absent link operations between characters and comics.
pub struct CharacterComicRepo;

impl CharacterComicRepo {
    /// Link a character to a comic. Returns `true` if a new link row was
    /// created, `false` if the pair already existed.
    pub async fn link(
        pool: &PgPool,
        character_id: DbId,
        comic_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(Self::LINK_SQL)
            .bind(character_id)
            .bind(comic_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Same as [`link`](Self::link), but within an open transaction.
    pub async fn link_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        character_id: DbId,
        comic_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(Self::LINK_SQL)
            .bind(character_id)
            .bind(comic_id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of links recorded for a character.
    pub async fn count_for_character(
        pool: &PgPool,
        character_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM character_comics WHERE character_id = $1")
            .bind(character_id)
            .fetch_one(pool)
            .await
    }

    const LINK_SQL: &'static str = "INSERT INTO character_comics (character_id, comic_id) \
         VALUES ($1, $2) ON CONFLICT (character_id, comic_id) DO NOTHING";
}
