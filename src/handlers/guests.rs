// src/handlers/guests.rs
// DOCUMENTATION: HTTP handlers for guest check-ins
// PURPOSE: Parse requests, call GuestService, return JSON

use crate::errors::GalleryError;
use crate::models::CreateGuestRequest;
use crate::services::GuestService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// POST /api/guests
pub async fn create_guest(
    service: web::Data<GuestService>,
    req: web::Json<CreateGuestRequest>,
) -> Result<impl Responder, GalleryError> {
    let id = service.create(req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "id": id,
        "message": "Guest registered successfully"
    })))
}

/// GET /api/guests
pub async fn list_guests(
    service: web::Data<GuestService>,
) -> Result<impl Responder, GalleryError> {
    let guests = service.list_all().await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "guests": guests
    })))
}

/// DELETE /api/guests/{id}
pub async fn delete_guest(
    service: web::Data<GuestService>,
    path: web::Path<String>,
) -> Result<impl Responder, GalleryError> {
    let id = path.into_inner();
    // A non-numeric id can't match any row, so there is nothing to delete
    if let Ok(key) = id.parse::<i64>() {
        service.delete_one(key).await?;
    }
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": format!("Guest {} deleted", id)
    })))
}

/// DELETE /api/guests
pub async fn delete_all_guests(
    service: web::Data<GuestService>,
) -> Result<impl Responder, GalleryError> {
    let deleted = service.delete_all().await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": format!("Deleted {} guests", deleted),
        "deleted": deleted
    })))
}

/// Configuration for guest routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/guests")
            .route("", web::post().to(create_guest))
            .route("", web::get().to(list_guests))
            .route("", web::delete().to(delete_all_guests))
            .route("/{id}", web::delete().to(delete_guest)),
    );
}

#[cfg(test)]
mod tests {
    use crate::db::test_pool;
    use crate::handlers::app_config;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_create_then_list() {
        let app = test::init_service(App::new().configure(app_config(test_pool().await))).await;

        let req = test::TestRequest::post()
            .uri("/api/guests")
            .set_json(json!({
                "name": "Ann",
                "email": "a@x.com",
                "galleryName": "Spring",
                "galleryId": "g1"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["id"], json!(1));

        let req = test::TestRequest::get().uri("/api/guests").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let guests = body["guests"].as_array().unwrap();
        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0]["id"], json!(1));
        assert_eq!(guests[0]["gallery_id"], json!("g1"));
        assert!(guests[0]["visit_date"].as_str().is_some());
    }

    #[actix_web::test]
    async fn test_missing_email_is_bad_request() {
        let app = test::init_service(App::new().configure(app_config(test_pool().await))).await;

        let req = test::TestRequest::post()
            .uri("/api/guests")
            .set_json(json!({ "name": "Ann", "galleryName": "Spring", "galleryId": "g1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("email"));

        let req = test::TestRequest::get().uri("/api/guests").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["guests"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let app = test::init_service(App::new().configure(app_config(test_pool().await))).await;

        let req = test::TestRequest::post()
            .uri("/api/guests")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_delete_routes() {
        let app = test::init_service(App::new().configure(app_config(test_pool().await))).await;

        let req = test::TestRequest::delete().uri("/api/guests").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["deleted"], json!(0));

        let req = test::TestRequest::delete().uri("/api/guests/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_delete_unparseable_id_is_noop_success() {
        let app = test::init_service(App::new().configure(app_config(test_pool().await))).await;

        let req = test::TestRequest::post()
            .uri("/api/guests")
            .set_json(json!({
                "name": "Ann",
                "email": "a@x.com",
                "galleryName": "Spring",
                "galleryId": "g1"
            }))
            .to_request();
        test::call_service(&app, req).await;

        for uri in ["/api/guests/abc", "/api/guests/99999999999999999999"] {
            let req = test::TestRequest::delete().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], json!(true));
        }

        let req = test::TestRequest::get().uri("/api/guests").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["guests"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_storage_failure_is_server_error() {
        let pool = test_pool().await;
        let app = test::init_service(App::new().configure(app_config(pool.clone()))).await;

        sqlx::query("DROP TABLE guests").execute(&pool).await.unwrap();

        let req = test::TestRequest::get().uri("/api/guests").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].is_string());
    }
}
