//! Repository for the `trails` table and its owned `modules`.

use futures::future::try_join_all;
use sqlx::PgPool;
use trails_core::types::DbId;

use crate::models::trail::{NewTrail, Trail, TrailWithModules};
use crate::repositories::ModuleRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_at";

/// Provides CRUD operations for trails. Module sets are always written
/// together with their trail.
pub struct TrailRepo;

impl TrailRepo {
    /// Insert a trail and its modules in one transaction.
    ///
    /// Modules are numbered by their position in `input.modules`.
    pub async fn create(pool: &PgPool, input: &NewTrail) -> Result<TrailWithModules, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO trails (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let trail = sqlx::query_as::<_, Trail>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;

        let modules = ModuleRepo::insert_all(&mut tx, trail.id, &input.modules).await?;

        tx.commit().await?;
        tracing::debug!(trail_id = trail.id, modules = modules.len(), "Trail created");
        Ok(TrailWithModules { trail, modules })
    }

    /// Find a trail by ID, enriched with its modules.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TrailWithModules>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trails WHERE id = $1");
        let trail = sqlx::query_as::<_, Trail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match trail {
            Some(trail) => {
                let modules = ModuleRepo::list_by_trail(pool, trail.id).await?;
                Ok(Some(TrailWithModules { trail, modules }))
            }
            None => Ok(None),
        }
    }

    /// List all trails, newest first, each with its modules.
    ///
    /// Module lookups run concurrently, one per trail; the result keeps the
    /// parent query's ordering regardless of which lookup finishes first.
    pub async fn list(pool: &PgPool) -> Result<Vec<TrailWithModules>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trails ORDER BY created_at DESC, id DESC");
        let trails = sqlx::query_as::<_, Trail>(&query).fetch_all(pool).await?;

        try_join_all(trails.into_iter().map(|trail| async move {
            let modules = ModuleRepo::list_by_trail(pool, trail.id).await?;
            Ok::<_, sqlx::Error>(TrailWithModules { trail, modules })
        }))
        .await
    }

    /// Replace a trail's fields and its entire module set.
    ///
    /// The update, the module delete and the re-insert share one
    /// transaction: if any step fails the previous module set survives.
    /// Returns `None` (and writes nothing) if no trail has the given `id`.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &NewTrail,
    ) -> Result<Option<TrailWithModules>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE trails SET name = $2, description = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let trail = sqlx::query_as::<_, Trail>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(trail) = trail else {
            return Ok(None);
        };

        let removed = ModuleRepo::delete_by_trail(&mut tx, trail.id).await?;
        let modules = ModuleRepo::insert_all(&mut tx, trail.id, &input.modules).await?;

        tx.commit().await?;
        tracing::debug!(
            trail_id = trail.id,
            removed,
            inserted = modules.len(),
            "Trail replaced"
        );
        Ok(Some(TrailWithModules { trail, modules }))
    }

    /// Delete a trail by ID. Its modules go with it via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trails WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
