//! Anime airing status and the normalizer applied before every write.
//!
//! Only two canonical values are stored: `"Finalizado"` and `"Emisión"`.
//! A handful of common lowercase spellings are corrected first; anything
//! else must already be canonical.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Canonical status for a finished series.
pub const STATUS_FINISHED: &str = "Finalizado";

/// Canonical status for a series still airing.
pub const STATUS_AIRING: &str = "Emisión";

/// Error message returned when a status is outside the allowed set.
pub const INVALID_STATUS_MESSAGE: &str = "El estado debe ser \"Emisión\" o \"Finalizado\"";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimeStatus {
    Finished,
    Airing,
}

impl AnimeStatus {
    /// Normalize `raw` and match it against the canonical set.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match normalize_status(raw) {
            STATUS_FINISHED => Ok(Self::Finished),
            STATUS_AIRING => Ok(Self::Airing),
            _ => Err(CoreError::Validation(INVALID_STATUS_MESSAGE.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Finished => STATUS_FINISHED,
            Self::Airing => STATUS_AIRING,
        }
    }
}

impl fmt::Display for AnimeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimeStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Correct the known lowercase spellings to their canonical form.
///
/// Matching is case-sensitive and exact: `"emision"` is corrected but
/// `"EMISION"` is returned unchanged and later rejected.
pub fn normalize_status(raw: &str) -> &str {
    match raw {
        "emisión" | "emision" => STATUS_AIRING,
        "finalizado" => STATUS_FINISHED,
        other => other,
    }
}
