// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and assemble the application

pub mod admin;
pub mod export;
pub mod guests;
pub mod health;
pub mod orders;
pub mod stats;

pub use admin::config as admin_config;
pub use export::config as export_config;
pub use guests::config as guests_config;
pub use health::config as health_config;
pub use orders::config as orders_config;
pub use stats::config as stats_config;

use crate::errors::GalleryError;
use crate::services::{ExportService, GuestService, OrderService, StatsService};
use actix_web::web;
use sqlx::SqlitePool;

/// Build services around the shared pool and register every route.
/// Used by the server factory in main.rs and by handler tests.
pub fn app_config(pool: SqlitePool) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(GuestService::new(pool.clone())))
            .app_data(web::Data::new(OrderService::new(pool.clone())))
            .app_data(web::Data::new(ExportService::new(pool.clone())))
            .app_data(web::Data::new(StatsService::new(pool)))
            // Malformed bodies answer with the same {error} shape as validation
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                GalleryError::InvalidInput(err.to_string()).into()
            }))
            .configure(health_config)
            .configure(guests_config)
            .configure(orders_config)
            .configure(export_config)
            .configure(stats_config)
            .configure(admin_config);
    }
}
