// src/handlers/admin.rs
// DOCUMENTATION: Admin dashboard page
// PURPOSE: Serve the embedded single-page dashboard at the site root

use actix_web::{web, HttpResponse, Responder};

const ADMIN_PAGE: &str = include_str!("../../public/index.html");

/// GET /
pub async fn admin_page() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(ADMIN_PAGE)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(admin_page));
}
