// src/db/schema.rs
// DOCUMENTATION: Table definitions
// PURPOSE: Idempotent schema creation run at startup

use sqlx::SqlitePool;

const CREATE_GUESTS: &str = r#"
    CREATE TABLE IF NOT EXISTS guests (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        gallery_name TEXT NOT NULL,
        gallery_id TEXT NOT NULL,
        visit_date TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

const CREATE_ORDERS: &str = r#"
    CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        gallery_name TEXT NOT NULL,
        gallery_id TEXT NOT NULL,
        photo_count INTEGER NOT NULL,
        photos TEXT NOT NULL,
        submitted_at TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

const CREATE_ORDERS_GALLERY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_orders_gallery_id ON orders (gallery_id)";

/// Create both tables if they are missing. Never drops or alters existing data.
pub async fn apply_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in [CREATE_GUESTS, CREATE_ORDERS, CREATE_ORDERS_GALLERY_INDEX] {
        sqlx::query(statement).execute(pool).await?;
    }

    log::debug!("Schema ensured for guests and orders");
    Ok(())
}

/// Single-connection in-memory pool with the schema applied
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    // Each in-memory connection is its own database, so keep exactly one alive
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(SqliteConnectOptions::from_str("sqlite::memory:").unwrap())
        .await
        .unwrap();

    apply_schema(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let pool = test_pool().await;

        sqlx::query(
            "INSERT INTO guests (name, email, gallery_name, gallery_id, visit_date) \
             VALUES ('Ann', 'a@x.com', 'Spring', 'g1', 'today')",
        )
        .execute(&pool)
        .await
        .unwrap();

        apply_schema(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM guests")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
