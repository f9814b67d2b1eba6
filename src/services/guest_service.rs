// src/services/guest_service.rs
// DOCUMENTATION: Business logic for guest check-ins
// PURPOSE: Validate submissions and delegate persistence to GuestRepository

use crate::db::GuestRepository;
use crate::errors::GalleryError;
use crate::models::{CreateGuestRequest, Guest, NewGuest};
use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

#[derive(Clone)]
pub struct GuestService {
    repo: GuestRepository,
}

impl GuestService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: GuestRepository::new(pool),
        }
    }

    /// Register a guest
    /// DOCUMENTATION: Rejects missing or empty identity fields before touching the store.
    /// visit_date falls back to the current time.
    pub async fn create(&self, req: CreateGuestRequest) -> Result<i64, GalleryError> {
        req.validate()?;

        let guest = NewGuest {
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            gallery_name: req.gallery_name.unwrap_or_default(),
            gallery_id: req.gallery_id.unwrap_or_default(),
            visit_date: req.visit_date.unwrap_or_else(|| Utc::now().to_rfc3339()),
        };

        let id = self.repo.insert(&guest).await?;
        log::info!("Registered guest {} for gallery {}", id, guest.gallery_id);
        Ok(id)
    }

    pub async fn list_all(&self) -> Result<Vec<Guest>, GalleryError> {
        self.repo.list_all().await
    }

    /// Delete one guest. Unknown ids are a successful no-op.
    pub async fn delete_one(&self, id: i64) -> Result<u64, GalleryError> {
        self.repo.delete_by_id(id).await
    }

    pub async fn delete_all(&self) -> Result<u64, GalleryError> {
        let deleted = self.repo.delete_all().await?;
        log::info!("Deleted {} guests", deleted);
        Ok(deleted)
    }
}
