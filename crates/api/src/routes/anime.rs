//! Route definitions for anime records.

use axum::routing::get;
use axum::Router;

use crate::handlers::anime;
use crate::state::AppState;

/// Anime routes.
///
/// ```text
/// GET    /animes         -> list
/// POST   /animes         -> create
/// DELETE /animes         -> delete_all
/// GET    /animes/{key}   -> get
/// PUT    /animes/{key}   -> update
/// DELETE /animes/{key}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/animes",
            get(anime::list)
                .post(anime::create)
                .delete(anime::delete_all),
        )
        .route(
            "/animes/{key}",
            get(anime::get).put(anime::update).delete(anime::delete),
        )
}
