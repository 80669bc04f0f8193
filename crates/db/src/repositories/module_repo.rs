//! Repository for the `modules` table.
//!
//! Modules only change as a whole set, so writes take an open transaction
//! owned by [`TrailRepo`](super::TrailRepo).

use sqlx::{PgPool, Postgres, Transaction};
use trails_core::trail::order_num_for_position;
use trails_core::types::DbId;

use crate::models::trail::{Module, NewModule};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, order_num, trail_id";

/// Provides read and set-replacement operations for trail modules.
pub struct ModuleRepo;

impl ModuleRepo {
    /// List the modules of a trail in display order.
    pub async fn list_by_trail(pool: &PgPool, trail_id: DbId) -> Result<Vec<Module>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM modules WHERE trail_id = $1 ORDER BY order_num, id"
        );
        sqlx::query_as::<_, Module>(&query)
            .bind(trail_id)
            .fetch_all(pool)
            .await
    }

    /// Insert `modules` under `trail_id`, numbering them 1..=N by position.
    ///
    /// Returns the inserted rows in the same order.
    pub async fn insert_all(
        tx: &mut Transaction<'_, Postgres>,
        trail_id: DbId,
        modules: &[NewModule],
    ) -> Result<Vec<Module>, sqlx::Error> {
        let query = format!(
            "INSERT INTO modules (title, content, order_num, trail_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );

        let mut inserted = Vec::with_capacity(modules.len());
        for (index, module) in modules.iter().enumerate() {
            let row = sqlx::query_as::<_, Module>(&query)
                .bind(&module.title)
                .bind(&module.content)
                .bind(order_num_for_position(index))
                .bind(trail_id)
                .fetch_one(&mut **tx)
                .await?;
            inserted.push(row);
        }
        Ok(inserted)
    }

    /// Delete every module of a trail. Returns the number of rows removed.
    pub async fn delete_by_trail(
        tx: &mut Transaction<'_, Postgres>,
        trail_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM modules WHERE trail_id = $1")
            .bind(trail_id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected())
    }
}
