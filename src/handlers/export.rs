// src/handlers/export.rs
// DOCUMENTATION: CSV download handlers
// PURPOSE: Serve ExportService output as file attachments

use crate::errors::GalleryError;
use crate::services::{CsvExport, ExportService};
use actix_web::{http::header, web, HttpResponse, Responder};

fn csv_attachment(export: CsvExport) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.filename),
        ))
        .body(export.body)
}

/// GET /api/export/guests
pub async fn export_guests(
    service: web::Data<ExportService>,
) -> Result<impl Responder, GalleryError> {
    Ok(csv_attachment(service.export_guests_csv().await?))
}

/// GET /api/export/orders
pub async fn export_orders(
    service: web::Data<ExportService>,
) -> Result<impl Responder, GalleryError> {
    Ok(csv_attachment(service.export_orders_csv().await?))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/export")
            .route("/guests", web::get().to(export_guests))
            .route("/orders", web::get().to(export_orders)),
    );
}
