// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and a `{error}` body
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl GalleryError {
    fn code(&self) -> &'static str {
        match self {
            GalleryError::ValidationError(_) => "VALIDATION_ERROR",
            GalleryError::InvalidInput(_) => "INVALID_INPUT",
            GalleryError::DatabaseError(_) => "DATABASE_ERROR",
        }
    }
}

impl From<sqlx::Error> for GalleryError {
    fn from(e: sqlx::Error) -> Self {
        GalleryError::DatabaseError(e.to_string())
    }
}

/// Collapse field-level validation failures into one message naming the fields
impl From<validator::ValidationErrors> for GalleryError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| wire_name(field))
            .collect();
        fields.sort_unstable();
        GalleryError::ValidationError(format!("Missing required fields: {}", fields.join(", ")))
    }
}

/// Request bodies are camelCase on the wire, struct fields are snake_case
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert GalleryError to HTTP response
impl ResponseError for GalleryError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "success": false,
            "error": self.to_string(),
            "code": self.code(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            GalleryError::ValidationError(_) => StatusCode::BAD_REQUEST,
            GalleryError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            GalleryError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
