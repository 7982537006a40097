use axum::{routing::get, Router};

pub mod dashboard;
pub mod queries;
pub mod records;
pub mod system;

/// Router for all endpoints that require a user context.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/queries", queries::router())
        .nest("/dashboard", dashboard::router())
        .route("/suppliers", get(records::list_suppliers))
        .route("/products", get(records::list_products))
        .route("/inventory", get(records::list_inventory))
        .route("/shipments", get(records::list_shipments))
        .route("/alerts", get(records::list_alerts))
}
