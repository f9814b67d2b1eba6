// src/services/stats_service.rs
// DOCUMENTATION: Dashboard aggregates
// PURPOSE: Count guests, orders and ordered photos in one call

use crate::db::{GuestRepository, OrderRepository};
use crate::errors::GalleryError;
use crate::models::Stats;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct StatsService {
    guests: GuestRepository,
    orders: OrderRepository,
}

impl StatsService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            guests: GuestRepository::new(pool.clone()),
            orders: OrderRepository::new(pool),
        }
    }

    /// The three aggregates are independent, so they run concurrently.
    /// Any single failure fails the whole call.
    pub async fn get_stats(&self) -> Result<Stats, GalleryError> {
        let (total_guests, total_orders, total_photos) = tokio::try_join!(
            self.guests.count(),
            self.orders.count(),
            self.orders.total_photos(),
        )?;

        Ok(Stats {
            total_guests,
            total_orders,
            total_photos,
        })
    }
}
