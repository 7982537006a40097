//! Read-only listings over the current snapshot.

use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use chainsight_analysis::Snapshot;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

#[derive(Serialize)]
struct Items<T> {
    items: Vec<T>,
}

fn items<T: Serialize>(items: Vec<T>) -> axum::response::Response {
    (StatusCode::OK, Json(Items { items })).into_response()
}

fn with_snapshot<F>(services: &AppServices, render: F) -> axum::response::Response
where
    F: FnOnce(&Snapshot) -> axum::response::Response,
{
    match services.queries.snapshot() {
        Ok(snapshot) => render(&snapshot),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_suppliers(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    with_snapshot(&services, |s| items(s.suppliers.iter().collect()))
}

pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    with_snapshot(&services, |s| items(s.products.iter().collect()))
}

pub async fn list_inventory(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    with_snapshot(&services, |s| {
        items(s.inventory_lines().iter().map(dto::InventoryView::from).collect())
    })
}

pub async fn list_shipments(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    with_snapshot(&services, |s| {
        items(s.shipment_lines().iter().map(dto::ShipmentView::from).collect())
    })
}

/// Unresolved alerts only.
pub async fn list_alerts(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    with_snapshot(&services, |s| items(s.active_alerts().collect()))
}
