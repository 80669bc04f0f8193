pub mod health;
pub mod trail;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /trails                 list, create
/// /trails/{id}            get, replace, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/trails", trail::router())
}
