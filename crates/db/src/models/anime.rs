//! Anime entity model.

use anime_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `animes` table.
///
/// `title_key` is a storage detail and is never selected into this struct.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Anime {
    pub id: DbId,
    pub title: String,
    pub status: String,
}
