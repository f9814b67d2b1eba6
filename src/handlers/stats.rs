// src/handlers/stats.rs
// DOCUMENTATION: Dashboard statistics handler

use crate::errors::GalleryError;
use crate::services::StatsService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /api/stats
pub async fn get_stats(
    service: web::Data<StatsService>,
) -> Result<impl Responder, GalleryError> {
    let stats = service.get_stats().await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "stats": stats
    })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/stats", web::get().to(get_stats));
}
