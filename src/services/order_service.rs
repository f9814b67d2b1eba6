// src/services/order_service.rs
// DOCUMENTATION: Business logic for photo orders
// PURPOSE: Validate submissions and delegate persistence to OrderRepository

use crate::db::OrderRepository;
use crate::errors::GalleryError;
use crate::models::{CreateOrderRequest, NewOrder, Order, Photos};
use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

#[derive(Clone)]
pub struct OrderService {
    repo: OrderRepository,
}

impl OrderService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: OrderRepository::new(pool),
        }
    }

    /// Submit an order
    /// DOCUMENTATION: Requires identity fields plus a non-empty photo list.
    /// photo_count is derived from the list; submitted_at falls back to now.
    pub async fn create(&self, req: CreateOrderRequest) -> Result<i64, GalleryError> {
        req.validate()?;

        let photos = Photos::from(req.photos.unwrap_or_default());
        if photos.is_empty() {
            return Err(GalleryError::ValidationError(
                "Missing required fields: photos".to_string(),
            ));
        }

        let order = NewOrder {
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            gallery_name: req.gallery_name.unwrap_or_default(),
            gallery_id: req.gallery_id.unwrap_or_default(),
            photos,
            submitted_at: req.submitted_at.unwrap_or_else(|| Utc::now().to_rfc3339()),
        };

        let id = self.repo.insert(&order).await?;
        log::info!(
            "Received order {} for gallery {} ({} photos)",
            id,
            order.gallery_id,
            order.photos.len()
        );
        Ok(id)
    }

    pub async fn list_all(&self) -> Result<Vec<Order>, GalleryError> {
        self.repo.list_all().await
    }

    /// Orders for one gallery; empty when none match
    pub async fn list_by_gallery(&self, gallery_id: &str) -> Result<Vec<Order>, GalleryError> {
        self.repo.list_by_gallery(gallery_id).await
    }

    /// Delete one order. Unknown ids are a successful no-op.
    pub async fn delete_one(&self, id: i64) -> Result<u64, GalleryError> {
        self.repo.delete_by_id(id).await
    }

    pub async fn delete_all(&self) -> Result<u64, GalleryError> {
        let deleted = self.repo.delete_all().await?;
        log::info!("Deleted {} orders", deleted);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::models::PhotoRef;

    fn request(email: &str, gallery_id: &str, photos: &[&str]) -> CreateOrderRequest {
        CreateOrderRequest {
            name: Some("Ann".into()),
            email: Some(email.into()),
            gallery_name: Some("Spring".into()),
            gallery_id: Some(gallery_id.into()),
            photos: Some(photos.iter().map(|p| PhotoRef::Id(p.to_string())).collect()),
            submitted_at: None,
        }
    }

    #[tokio::test]
    async fn test_photos_read_back_in_order() {
        let service = OrderService::new(test_pool().await);

        service
            .create(request("a@x.com", "g1", &["p1", "p2", "p3"]))
            .await
            .unwrap();

        let orders = service.list_all().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].photo_count, 3);
        assert_eq!(
            orders[0].photos,
            Photos(vec![
                PhotoRef::Id("p1".into()),
                PhotoRef::Id("p2".into()),
                PhotoRef::Id("p3".into()),
            ])
        );
    }

    #[tokio::test]
    async fn test_list_by_gallery_filters_exactly() {
        let service = OrderService::new(test_pool().await);
        let first = service.create(request("a@x.com", "g1", &["p1"])).await.unwrap();
        service.create(request("b@x.com", "g10", &["p2"])).await.unwrap();
        let third = service.create(request("c@x.com", "g1", &["p3"])).await.unwrap();

        let ids: Vec<i64> = service
            .list_by_gallery("g1")
            .await
            .unwrap()
            .iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec![third, first]);

        assert!(service.list_by_gallery("missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_photos_rejected() {
        let service = OrderService::new(test_pool().await);

        let result = service.create(request("a@x.com", "g1", &[])).await;

        assert!(matches!(result, Err(GalleryError::ValidationError(_))));
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_photos_rejected() {
        let service = OrderService::new(test_pool().await);
        let mut req = request("a@x.com", "g1", &["p1"]);
        req.photos = None;

        assert!(matches!(
            service.create(req).await,
            Err(GalleryError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_one_and_all() {
        let service = OrderService::new(test_pool().await);
        let id = service.create(request("a@x.com", "g1", &["p1"])).await.unwrap();
        service.create(request("b@x.com", "g1", &["p2"])).await.unwrap();

        assert_eq!(service.delete_one(id).await.unwrap(), 1);
        assert_eq!(service.delete_one(id).await.unwrap(), 0);
        assert_eq!(service.delete_all().await.unwrap(), 1);
        assert_eq!(service.delete_all().await.unwrap(), 0);
    }
}
