// src/db/order_repository.rs
// DOCUMENTATION: Order database operations
// PURPOSE: Parameterized SQL for the orders table; photos cross the boundary as JSON text

use crate::errors::GalleryError;
use crate::models::{NewOrder, Order, OrderSummary, Photos};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

/// Raw orders row with photos still in their stored text form
#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    name: String,
    email: String,
    gallery_name: String,
    gallery_id: String,
    photo_count: i64,
    photos: String,
    submitted_at: String,
    created_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> Result<Order, GalleryError> {
        let photos = Photos::from_storage(&self.photos).map_err(|e| {
            log::error!("Order {} has unreadable photos: {}", self.id, e);
            GalleryError::DatabaseError(format!("Stored photos for order {} are invalid", self.id))
        })?;

        Ok(Order {
            id: self.id,
            name: self.name,
            email: self.email,
            gallery_name: self.gallery_name,
            gallery_id: self.gallery_id,
            photo_count: self.photo_count,
            photos,
            submitted_at: self.submitted_at,
            created_at: self.created_at,
        })
    }
}

/// OrderRepository: all database operations for orders
#[derive(Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an order and return the store-assigned id
    /// DOCUMENTATION: photo_count is taken from the photo list being stored
    pub async fn insert(&self, order: &NewOrder) -> Result<i64, GalleryError> {
        let photos = order.photos.to_storage().map_err(|e| {
            GalleryError::DatabaseError(format!("Serialize photos failed: {}", e))
        })?;

        let result = sqlx::query(
            r#"
            INSERT INTO orders (
                name, email, gallery_name, gallery_id,
                photo_count, photos, submitted_at, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&order.name)
        .bind(&order.email)
        .bind(&order.gallery_name)
        .bind(&order.gallery_id)
        .bind(order.photos.len() as i64)
        .bind(photos)
        .bind(&order.submitted_at)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create order: {}", e);
            GalleryError::DatabaseError(format!("Create order failed: {}", e))
        })?;

        Ok(result.last_insert_rowid())
    }

    /// All orders, newest first
    pub async fn list_all(&self) -> Result<Vec<Order>, GalleryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, name, email, gallery_name, gallery_id,
                   photo_count, photos, submitted_at, created_at
            FROM orders
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch orders: {}", e);
            GalleryError::DatabaseError(format!("Fetch orders failed: {}", e))
        })?;

        rows.into_iter().map(OrderRow::into_order).collect()
    }

    /// Orders whose gallery_id matches exactly, newest first
    pub async fn list_by_gallery(&self, gallery_id: &str) -> Result<Vec<Order>, GalleryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, name, email, gallery_name, gallery_id,
                   photo_count, photos, submitted_at, created_at
            FROM orders
            WHERE gallery_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(gallery_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch orders for gallery {}: {}", gallery_id, e);
            GalleryError::DatabaseError(format!("Fetch orders failed: {}", e))
        })?;

        rows.into_iter().map(OrderRow::into_order).collect()
    }

    /// All orders without the photo list, newest first
    pub async fn list_summaries(&self) -> Result<Vec<OrderSummary>, GalleryError> {
        sqlx::query_as::<_, OrderSummary>(
            r#"
            SELECT id, name, email, gallery_name, gallery_id,
                   photo_count, submitted_at, created_at
            FROM orders
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch order summaries: {}", e);
            GalleryError::DatabaseError(format!("Fetch orders failed: {}", e))
        })
    }

    /// Delete one order; returns rows affected (0 when the id is unknown)
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, GalleryError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete order {}: {}", id, e);
                GalleryError::DatabaseError(format!("Delete order failed: {}", e))
            })?;

        Ok(result.rows_affected())
    }

    pub async fn delete_all(&self) -> Result<u64, GalleryError> {
        let result = sqlx::query("DELETE FROM orders")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete all orders: {}", e);
                GalleryError::DatabaseError(format!("Delete orders failed: {}", e))
            })?;

        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, GalleryError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Failed to count orders: {}", e);
                GalleryError::DatabaseError(format!("Count orders failed: {}", e))
            })
    }

    /// Sum of photo_count across all orders; 0 on an empty table
    pub async fn total_photos(&self) -> Result<i64, GalleryError> {
        sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(photo_count), 0) FROM orders")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Failed to sum photo counts: {}", e);
                GalleryError::DatabaseError(format!("Sum photos failed: {}", e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::models::PhotoRef;

    #[tokio::test]
    async fn test_corrupt_photos_fail_reads_but_not_summaries() {
        let pool = test_pool().await;
        let repo = OrderRepository::new(pool.clone());

        sqlx::query(
            "INSERT INTO orders (name, email, gallery_name, gallery_id, photo_count, photos, submitted_at, created_at) \
             VALUES ('Ann', 'a@x.com', 'Spring', 'g1', 2, 'garbage', 'now', ?)",
        )
        .bind(Utc::now())
        .execute(&pool)
        .await
        .unwrap();

        assert!(matches!(
            repo.list_all().await,
            Err(GalleryError::DatabaseError(_))
        ));

        let summaries = repo.list_summaries().await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].photo_count, 2);
    }

    #[tokio::test]
    async fn test_photo_count_follows_photo_list() {
        let repo = OrderRepository::new(test_pool().await);
        let order = NewOrder {
            name: "Ann".into(),
            email: "a@x.com".into(),
            gallery_name: "Spring".into(),
            gallery_id: "g1".into(),
            photos: Photos(vec![PhotoRef::Id("a".into()), PhotoRef::Id("b".into())]),
            submitted_at: "2024-05-01T10:00:00Z".into(),
        };

        repo.insert(&order).await.unwrap();

        assert_eq!(repo.total_photos().await.unwrap(), 2);
        assert_eq!(repo.list_all().await.unwrap()[0].photo_count, 2);
    }
}
