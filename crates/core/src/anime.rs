//! Request payload validation for anime writes.
//!
//! Both create and update accept the same `{title, status}` body. The raw
//! payload keeps every field optional so a missing field becomes a
//! validation error instead of a deserialization failure.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::status::AnimeStatus;

/// Entity name used in not-found errors.
pub const ENTITY_ANIME: &str = "Anime";

pub const FIELDS_REQUIRED_MESSAGE: &str = "Los campos título y estado son requeridos";

pub const TITLE_LENGTH_MESSAGE: &str = "El título debe tener entre 1 y 100 caracteres";

pub const DUPLICATE_TITLE_MESSAGE: &str = "Ya existe un anime con este título";

/// Raw `{title, status}` body as received from the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnimePayload {
    pub title: Option<String>,
    pub status: Option<String>,
}

/// A payload that passed validation, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct AnimeFields {
    #[validate(length(
        min = 1,
        max = 100,
        message = "El título debe tener entre 1 y 100 caracteres"
    ))]
    pub title: String,
    pub status: AnimeStatus,
}

impl AnimeFields {
    /// Case-folded title used for uniqueness checks and title lookups.
    pub fn title_key(&self) -> String {
        title_key(&self.title)
    }
}

impl AnimePayload {
    /// Check required fields, normalize the status and bound the title.
    ///
    /// Checks run in that order, so a body with both a bad status and an
    /// over-long title reports the status.
    pub fn validate(self) -> Result<AnimeFields, CoreError> {
        let (Some(title), Some(status)) = (self.title, self.status) else {
            return Err(CoreError::Validation(FIELDS_REQUIRED_MESSAGE.to_string()));
        };

        let status = AnimeStatus::parse(&status)?;
        let fields = AnimeFields { title, status };

        Validate::validate(&fields).map_err(|e| CoreError::Validation(first_message(&e)))?;
        Ok(fields)
    }
}

/// Case-insensitive comparison key for titles.
pub fn title_key(title: &str) -> String {
    title.to_lowercase()
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(ToString::to_string))
        .unwrap_or_else(|| errors.to_string())
}
