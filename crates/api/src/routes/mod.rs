pub mod anime;
pub mod health;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                 service and database health
///
/// /animes                 list, create, delete all
/// /animes/{key}           get, update, delete (key = id or title)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(anime::router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

/// Fallback for paths no route matches, so clients always get a JSON body.
async fn route_not_found() -> AppError {
    AppError::NotFound("Ruta no encontrada".to_string())
}

/// Fallback for a known path hit with a method it does not route.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("Método no permitido".to_string())
}
