//! Handlers for the `/animes` resource.
//!
//! `/animes/{key}` is shared by ID and title lookups: a key made only of
//! ASCII digits is an ID, anything else is a title.

use anime_core::anime::{AnimePayload, DUPLICATE_TITLE_MESSAGE, ENTITY_ANIME};
use anime_core::error::CoreError;
use anime_core::types::DbId;
use anime_db::repositories::AnimeRepo;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Summary message returned by `DELETE /animes`.
pub const ALL_DELETED_MESSAGE: &str = "Todos los animes han sido eliminados exitosamente.";

/// How a `{key}` path segment addresses a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimeKey {
    Id(DbId),
    Title(String),
}

impl AnimeKey {
    /// Classify a raw path segment.
    ///
    /// An all-digit key too large for `DbId` cannot name any record and is
    /// reported as not found.
    pub fn parse(raw: String) -> AppResult<Self> {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            return raw
                .parse::<DbId>()
                .map(AnimeKey::Id)
                .map_err(|_| not_found(raw));
        }
        Ok(AnimeKey::Title(raw))
    }
}

fn not_found(key: impl ToString) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_ANIME,
        key: key.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /animes
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let animes = AnimeRepo::list(&state.pool).await?;
    Ok(Json(animes))
}

/// GET /animes/{key}
///
/// Fetch a single record by ID or by case-insensitive title.
pub async fn get(
    State(state): State<AppState>,
    key: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(key) = key?;
    let anime = match AnimeKey::parse(key)? {
        AnimeKey::Id(id) => AnimeRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| not_found(id))?,
        AnimeKey::Title(title) => AnimeRepo::find_by_title(&state.pool, &title)
            .await?
            .ok_or_else(|| not_found(title))?,
    };
    Ok(Json(anime))
}

/// POST /animes
///
/// Create a record. The status is normalized and the title must not collide
/// with any existing title ignoring case.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<AnimePayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let fields = input.validate()?;

    if AnimeRepo::find_title_conflict(&state.pool, &fields.title, None)
        .await?
        .is_some()
    {
        return Err(duplicate_title());
    }

    let anime = AnimeRepo::create(&state.pool, &fields).await?;

    tracing::info!(anime_id = anime.id, title = %anime.title, "Anime created");

    Ok(Json(anime))
}

/// PUT /animes/{id}
///
/// Replace title and status. Existence is checked before the body so an
/// unknown ID is a 404 regardless of the payload.
pub async fn update(
    State(state): State<AppState>,
    key: Result<Path<String>, PathRejection>,
    payload: Result<Json<AnimePayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(key) = key?;
    let id = match AnimeKey::parse(key)? {
        AnimeKey::Id(id) => id,
        AnimeKey::Title(title) => return Err(not_found(title)),
    };

    if AnimeRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }

    let Json(input) = payload?;
    let fields = input.validate()?;

    if AnimeRepo::find_title_conflict(&state.pool, &fields.title, Some(id))
        .await?
        .is_some()
    {
        return Err(duplicate_title());
    }

    let anime = AnimeRepo::update(&state.pool, id, &fields)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(anime_id = id, title = %anime.title, status = %anime.status, "Anime updated");

    Ok(Json(anime))
}

/// DELETE /animes/{key}
///
/// Delete a single record by ID or by case-insensitive title and return it.
pub async fn delete(
    State(state): State<AppState>,
    key: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(key) = key?;
    let anime = match AnimeKey::parse(key)? {
        AnimeKey::Id(id) => AnimeRepo::delete_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| not_found(id))?,
        AnimeKey::Title(title) => AnimeRepo::delete_by_title(&state.pool, &title)
            .await?
            .ok_or_else(|| not_found(title))?,
    };

    tracing::info!(anime_id = anime.id, title = %anime.title, "Anime deleted");

    Ok(Json(anime))
}

/// DELETE /animes
///
/// Delete every record. Succeeds on an empty table.
pub async fn delete_all(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let deleted = AnimeRepo::delete_all(&state.pool).await?;

    tracing::info!(deleted, "All animes deleted");

    Ok(Json(MessageResponse {
        message: ALL_DELETED_MESSAGE,
        deleted,
    }))
}

fn duplicate_title() -> AppError {
    AppError::Core(CoreError::Duplicate(DUPLICATE_TITLE_MESSAGE.to_string()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn digit_keys_are_ids() {
        assert_eq!(AnimeKey::parse("42".into()).unwrap(), AnimeKey::Id(42));
        assert_eq!(AnimeKey::parse("007".into()).unwrap(), AnimeKey::Id(7));
    }

    #[test]
    fn other_keys_are_titles() {
        assert_eq!(
            AnimeKey::parse("Naruto".into()).unwrap(),
            AnimeKey::Title("Naruto".into())
        );
        assert_eq!(
            AnimeKey::parse("-5".into()).unwrap(),
            AnimeKey::Title("-5".into())
        );
        assert_eq!(
            AnimeKey::parse("86 Eighty-Six".into()).unwrap(),
            AnimeKey::Title("86 Eighty-Six".into())
        );
    }

    #[test]
    fn overflowing_digit_key_is_not_found() {
        assert_matches!(
            AnimeKey::parse("99999999999999999999999".into()),
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
    }
}
