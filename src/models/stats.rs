// src/models/stats.rs

use serde::Serialize;

/// Dashboard aggregates across both tables
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats {
    pub total_guests: i64,
    pub total_orders: i64,
    /// Sum of photo_count over all orders, zero when there are none
    pub total_photos: i64,
}
