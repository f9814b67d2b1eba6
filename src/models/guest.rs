// src/models/guest.rs
// DOCUMENTATION: Guest check-in records
// PURPOSE: Database row and request payload for gallery visitors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// One visitor check-in
/// DOCUMENTATION: Maps directly to the guests table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Guest {
    /// Store-assigned surrogate key
    pub id: i64,
    pub name: String,
    pub email: String,
    pub gallery_name: String,
    /// Opaque identifier of the external gallery
    pub gallery_id: String,
    pub visit_date: String,
    pub created_at: DateTime<Utc>,
}

/// Request to register a guest
/// DOCUMENTATION: Body of POST /api/guests
/// All four identity fields must be present and non-empty
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    #[validate(required, length(min = 1))]
    pub gallery_name: Option<String>,

    #[validate(required, length(min = 1))]
    pub gallery_id: Option<String>,

    /// Defaults to the time of creation when absent
    pub visit_date: Option<String>,
}

/// Validated guest ready to insert
#[derive(Debug, Clone)]
pub struct NewGuest {
    pub name: String,
    pub email: String,
    pub gallery_name: String,
    pub gallery_id: String,
    pub visit_date: String,
}
