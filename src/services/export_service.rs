// src/services/export_service.rs
// DOCUMENTATION: CSV downloads for the admin dashboard
// PURPOSE: Render guests and orders as comma-separated text with a fixed header row

use crate::db::{GuestRepository, OrderRepository};
use crate::errors::GalleryError;
use crate::models::{Guest, OrderSummary};
use chrono::SecondsFormat;
use sqlx::SqlitePool;

const GUEST_HEADER: &str = "ID,Name,Email,Gallery Name,Gallery ID,Visit Date,Created At";
const ORDER_HEADER: &str =
    "ID,Name,Email,Gallery Name,Gallery ID,Photo Count,Submitted At,Created At";

/// A rendered export plus the filename suggested to the browser
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: &'static str,
    pub body: String,
}

#[derive(Clone)]
pub struct ExportService {
    guests: GuestRepository,
    orders: OrderRepository,
}

impl ExportService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            guests: GuestRepository::new(pool.clone()),
            orders: OrderRepository::new(pool),
        }
    }

    pub async fn export_guests_csv(&self) -> Result<CsvExport, GalleryError> {
        let guests = self.guests.list_all().await?;
        log::info!("Exporting {} guests", guests.len());

        Ok(CsvExport {
            filename: "guests.csv",
            body: render_guests(&guests),
        })
    }

    /// Orders are exported with their photo count only, never the photo list
    pub async fn export_orders_csv(&self) -> Result<CsvExport, GalleryError> {
        let orders = self.orders.list_summaries().await?;
        log::info!("Exporting {} orders", orders.len());

        Ok(CsvExport {
            filename: "orders.csv",
            body: render_orders(&orders),
        })
    }
}

/// Quote a text field, doubling any embedded quote characters
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn render_guests(guests: &[Guest]) -> String {
    let mut out = String::from(GUEST_HEADER);
    out.push('\n');

    for g in guests {
        let line = [
            g.id.to_string(),
            quoted(&g.name),
            quoted(&g.email),
            quoted(&g.gallery_name),
            quoted(&g.gallery_id),
            quoted(&g.visit_date),
            quoted(&g.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        ]
        .join(",");
        out.push_str(&line);
        out.push('\n');
    }

    out
}

fn render_orders(orders: &[OrderSummary]) -> String {
    let mut out = String::from(ORDER_HEADER);
    out.push('\n');

    for o in orders {
        let line = [
            o.id.to_string(),
            quoted(&o.name),
            quoted(&o.email),
            quoted(&o.gallery_name),
            quoted(&o.gallery_id),
            o.photo_count.to_string(),
            quoted(&o.submitted_at),
            quoted(&o.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        ]
        .join(",");
        out.push_str(&line);
        out.push('\n');
    }

    out
}
