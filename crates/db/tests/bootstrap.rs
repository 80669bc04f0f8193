use sqlx::PgPool;

/// Full bootstrap: connect, migrate, verify both tables exist.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    trails_db::health_check(&pool).await.unwrap();

    for table in ["trails", "modules"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Re-running migrations at startup must be a no-op.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_migrations_are_idempotent(pool: PgPool) {
    trails_db::run_migrations(&pool).await.unwrap();
    trails_db::run_migrations(&pool).await.unwrap();
}

/// Module rows cannot exist without a parent trail.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_module_requires_existing_trail(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO modules (title, content, order_num, trail_id) VALUES ('Orphan', NULL, 1, 999999)",
    )
    .execute(&pool)
    .await;

    let err = result.expect_err("foreign key should reject orphan module");
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}
