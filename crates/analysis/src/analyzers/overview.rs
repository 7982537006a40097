use chrono::{DateTime, Utc};

use crate::result::QueryAnalysis;
use crate::snapshot::Snapshot;
use crate::stats;

/// Catch-all analyzer: headline counts plus pointers to the focused questions.
pub fn analyze(snapshot: &Snapshot, _now: DateTime<Utc>) -> QueryAnalysis {
    QueryAnalysis::new("Here's an overview of your supply chain:")
        .with_insight(format!("Total suppliers: {}", snapshot.suppliers.len()))
        .with_insight(format!("Total products: {}", snapshot.products.len()))
        .with_insight(format!(
            "Active shipments: {}",
            stats::active_shipment_count(&snapshot.shipments)
        ))
        .with_insight(format!("Active alerts: {}", snapshot.active_alerts().count()))
        .with_recommendation("Ask about delays, reorders, supplier reliability, inventory or shipments for a focused analysis")
        .with_recommendation("Review active alerts to catch emerging supply issues early")
}
