//! Route definitions for the `/trails` resource.
//!
//! Modules are a sub-resource that is never addressed directly; they travel
//! inside the trail bodies.

use axum::routing::get;
use axum::Router;

use crate::handlers::trail;
use crate::state::AppState;

/// Routes mounted at `/trails`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> replace
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trail::list).post(trail::create))
        .route(
            "/{id}",
            get(trail::get_by_id)
                .put(trail::replace)
                .delete(trail::delete),
        )
}
