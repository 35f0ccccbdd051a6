//! Shared response payload types for API handlers.
//!
//! Record endpoints serialize the row directly; only summary operations
//! that have no record to return use the types here.

use serde::Serialize;

/// `{ "message": ..., "deleted": n }` summary for bulk operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    pub deleted: u64,
}
