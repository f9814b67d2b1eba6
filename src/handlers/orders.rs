// src/handlers/orders.rs
// DOCUMENTATION: HTTP handlers for photo orders
// PURPOSE: Parse requests, call OrderService, return JSON

use crate::errors::GalleryError;
use crate::models::CreateOrderRequest;
use crate::services::OrderService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// POST /api/orders
pub async fn create_order(
    service: web::Data<OrderService>,
    req: web::Json<CreateOrderRequest>,
) -> Result<impl Responder, GalleryError> {
    let id = service.create(req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "id": id,
        "message": "Order submitted successfully"
    })))
}

/// GET /api/orders
pub async fn list_orders(
    service: web::Data<OrderService>,
) -> Result<impl Responder, GalleryError> {
    let orders = service.list_all().await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "orders": orders
    })))
}

/// GET /api/orders/{gallery_id}
pub async fn list_gallery_orders(
    service: web::Data<OrderService>,
    path: web::Path<String>,
) -> Result<impl Responder, GalleryError> {
    let orders = service.list_by_gallery(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "orders": orders
    })))
}

/// DELETE /api/orders/{id}
pub async fn delete_order(
    service: web::Data<OrderService>,
    path: web::Path<String>,
) -> Result<impl Responder, GalleryError> {
    let id = path.into_inner();
    // A non-numeric id can't match any row, so there is nothing to delete
    if let Ok(key) = id.parse::<i64>() {
        service.delete_one(key).await?;
    }
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": format!("Order {} deleted", id)
    })))
}

/// DELETE /api/orders
pub async fn delete_all_orders(
    service: web::Data<OrderService>,
) -> Result<impl Responder, GalleryError> {
    let deleted = service.delete_all().await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": format!("Deleted {} orders", deleted),
        "deleted": deleted
    })))
}

/// Configuration for order routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/orders")
            .route("", web::post().to(create_order))
            .route("", web::get().to(list_orders))
            .route("", web::delete().to(delete_all_orders))
            // One resource: GET reads the segment as a gallery id, DELETE as an order id
            .route("/{id}", web::get().to(list_gallery_orders))
            .route("/{id}", web::delete().to(delete_order)),
    );
}
