// src/models/order.rs
// DOCUMENTATION: Photo order records
// PURPOSE: Typed photo selections plus the order row and request payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use validator::Validate;

/// A single favorited photo as submitted by the client.
/// Usually a bare identifier or a descriptor object such as `{"id": "...", "url": "..."}`;
/// any other JSON value is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhotoRef {
    Id(String),
    Number(i64),
    Descriptor(Map<String, Value>),
    Other(Value),
}

/// Ordered photo selection, stored as JSON text in the orders table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Photos(pub Vec<PhotoRef>);

impl Photos {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Text form written to the photos column
    pub fn to_storage(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    /// Parse the photos column back into the structured list
    pub fn from_storage(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(Photos)
    }
}

impl From<Vec<PhotoRef>> for Photos {
    fn from(photos: Vec<PhotoRef>) -> Self {
        Photos(photos)
    }
}

/// A submitted set of favorited photos
/// DOCUMENTATION: API shape of an orders row, photos already parsed
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub gallery_name: String,
    pub gallery_id: String,
    /// Length of `photos` at submission, kept for cheap aggregation
    pub photo_count: i64,
    pub photos: Photos,
    pub submitted_at: String,
    pub created_at: DateTime<Utc>,
}

/// Order columns without the photo list, used by the CSV export
#[derive(Debug, Clone, FromRow)]
pub struct OrderSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub gallery_name: String,
    pub gallery_id: String,
    pub photo_count: i64,
    pub submitted_at: String,
    pub created_at: DateTime<Utc>,
}

/// Request to submit an order
/// DOCUMENTATION: Body of POST /api/orders
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    #[validate(required, length(min = 1))]
    pub gallery_name: Option<String>,

    #[validate(required, length(min = 1))]
    pub gallery_id: Option<String>,

    /// Must contain at least one photo
    #[validate(required, length(min = 1))]
    pub photos: Option<Vec<PhotoRef>>,

    /// Defaults to the time of creation when absent
    pub submitted_at: Option<String>,
}

/// Validated order ready to insert
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub name: String,
    pub email: String,
    pub gallery_name: String,
    pub gallery_id: String,
    pub photos: Photos,
    pub submitted_at: String,
}
