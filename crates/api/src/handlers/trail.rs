//! Handlers for the `/trails` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use trails_core::error::CoreError;
use trails_core::trail::TRAIL_ENTITY;
use trails_core::types::DbId;
use trails_db::models::trail::{TrailInput, TrailWithModules};
use trails_db::repositories::TrailRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: TRAIL_ENTITY,
        id,
    })
}

/// GET /api/trails
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TrailWithModules>>> {
    let trails = TrailRepo::list(&state.pool).await?;
    Ok(Json(trails))
}

/// GET /api/trails/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TrailWithModules>> {
    let trail = TrailRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(trail))
}

/// POST /api/trails
///
/// Validates presence of `name` before touching the store.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<TrailInput>,
) -> AppResult<(StatusCode, Json<TrailWithModules>)> {
    let new_trail = input.validate()?;
    let trail = TrailRepo::create(&state.pool, &new_trail).await?;
    tracing::info!(trail_id = trail.trail.id, "Created trail");
    Ok((StatusCode::CREATED, Json(trail)))
}

/// PUT /api/trails/{id}
///
/// Replaces the trail's fields and its whole module set. Modules missing
/// from the body are gone afterwards.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<TrailInput>,
) -> AppResult<Json<TrailWithModules>> {
    let new_trail = input.validate()?;
    let trail = TrailRepo::replace(&state.pool, id, &new_trail)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(trail_id = id, modules = trail.modules.len(), "Replaced trail");
    Ok(Json(trail))
}

/// DELETE /api/trails/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !TrailRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(trail_id = id, "Deleted trail");
    Ok(Json(MessageResponse::new("Trilha deletada com sucesso")))
}
