//! Repository for the `animes` table.
//!
//! Title comparisons go through the `title_key` column, which the caller
//! never supplies directly: it is derived here from the submitted title.

use anime_core::anime::{title_key, AnimeFields};
use anime_core::types::DbId;

use crate::models::anime::Anime;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, status";

/// Provides CRUD operations for anime records.
pub struct AnimeRepo;

impl AnimeRepo {
    /// List every record in storage order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Anime>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animes ORDER BY id");
        sqlx::query_as::<_, Anime>(&query).fetch_all(pool).await
    }

    /// Find a record by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Anime>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animes WHERE id = ?1");
        sqlx::query_as::<_, Anime>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a record whose title matches `title` ignoring case.
    ///
    /// The lowest ID wins if several rows share the key.
    pub async fn find_by_title(pool: &DbPool, title: &str) -> Result<Option<Anime>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM animes WHERE title_key = ?1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Anime>(&query)
            .bind(title_key(title))
            .fetch_optional(pool)
            .await
    }

    /// Find a record, other than `exclude_id`, that already uses `title`
    /// under case-insensitive comparison.
    pub async fn find_title_conflict(
        pool: &DbPool,
        title: &str,
        exclude_id: Option<DbId>,
    ) -> Result<Option<Anime>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM animes \
             WHERE title_key = ?1 AND (?2 IS NULL OR id <> ?2) \
             ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, Anime>(&query)
            .bind(title_key(title))
            .bind(exclude_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new record, returning the created row.
    pub async fn create(pool: &DbPool, input: &AnimeFields) -> Result<Anime, sqlx::Error> {
        let query = format!(
            "INSERT INTO animes (title, title_key, status) \
             VALUES (?1, ?2, ?3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Anime>(&query)
            .bind(&input.title)
            .bind(input.title_key())
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Replace the title and status of a record.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &AnimeFields,
    ) -> Result<Option<Anime>, sqlx::Error> {
        let query = format!(
            "UPDATE animes SET \
                title = ?2, \
                title_key = ?3, \
                status = ?4 \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Anime>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.title_key())
            .bind(input.status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete a record by ID, returning the row as it was.
    pub async fn delete_by_id(pool: &DbPool, id: DbId) -> Result<Option<Anime>, sqlx::Error> {
        let query = format!("DELETE FROM animes WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Anime>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete the record matching `title` ignoring case, returning the row
    /// as it was.
    pub async fn delete_by_title(pool: &DbPool, title: &str) -> Result<Option<Anime>, sqlx::Error> {
        let query = format!(
            "DELETE FROM animes WHERE id = \
                (SELECT id FROM animes WHERE title_key = ?1 ORDER BY id LIMIT 1) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Anime>(&query)
            .bind(title_key(title))
            .fetch_optional(pool)
            .await
    }

    /// Delete every record. Returns the number of rows removed.
    pub async fn delete_all(pool: &DbPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM animes").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
