// src/db/guest_repository.rs
// DOCUMENTATION: Guest database operations
// PURPOSE: Parameterized SQL for the guests table

use crate::errors::GalleryError;
use crate::models::{Guest, NewGuest};
use chrono::Utc;
use sqlx::SqlitePool;

/// GuestRepository: all database operations for guests
/// DOCUMENTATION: Holds a clone of the pool handed over at startup
#[derive(Clone)]
pub struct GuestRepository {
    pool: SqlitePool,
}

impl GuestRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a guest and return the store-assigned id
    pub async fn insert(&self, guest: &NewGuest) -> Result<i64, GalleryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO guests (name, email, gallery_name, gallery_id, visit_date, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&guest.name)
        .bind(&guest.email)
        .bind(&guest.gallery_name)
        .bind(&guest.gallery_id)
        .bind(&guest.visit_date)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create guest: {}", e);
            GalleryError::DatabaseError(format!("Create guest failed: {}", e))
        })?;

        Ok(result.last_insert_rowid())
    }

    /// All guests, newest first
    pub async fn list_all(&self) -> Result<Vec<Guest>, GalleryError> {
        sqlx::query_as::<_, Guest>(
            r#"
            SELECT id, name, email, gallery_name, gallery_id, visit_date, created_at
            FROM guests
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch guests: {}", e);
            GalleryError::DatabaseError(format!("Fetch guests failed: {}", e))
        })
    }

    /// Delete one guest; returns rows affected (0 when the id is unknown)
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, GalleryError> {
        let result = sqlx::query("DELETE FROM guests WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete guest {}: {}", id, e);
                GalleryError::DatabaseError(format!("Delete guest failed: {}", e))
            })?;

        Ok(result.rows_affected())
    }

    pub async fn delete_all(&self) -> Result<u64, GalleryError> {
        let result = sqlx::query("DELETE FROM guests")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete all guests: {}", e);
                GalleryError::DatabaseError(format!("Delete guests failed: {}", e))
            })?;

        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, GalleryError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM guests")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Failed to count guests: {}", e);
                GalleryError::DatabaseError(format!("Count guests failed: {}", e))
            })
    }
}
