use chrono::{DateTime, Duration, Utc};

use crate::result::QueryAnalysis;
use crate::snapshot::Snapshot;
use crate::stats;

/// Look-ahead window for "upcoming" deliveries.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

pub fn analyze(snapshot: &Snapshot, now: DateTime<Utc>) -> QueryAnalysis {
    let active = stats::active_shipment_count(&snapshot.shipments);

    let horizon = now + Duration::days(UPCOMING_WINDOW_DAYS);
    let lines = snapshot.shipment_lines();
    let upcoming: Vec<_> = lines
        .iter()
        .filter(|l| {
            let eta = l.shipment.expected_delivery_date;
            eta > now && eta < horizon
        })
        .collect();

    let mut out = QueryAnalysis::new(format!("There are {active} active shipments."))
        .with_insight(format!(
            "{} shipments expected in the next {UPCOMING_WINDOW_DAYS} days",
            upcoming.len()
        ));

    // Snapshot order, not the earliest ETA.
    if let Some(next) = upcoming.first() {
        out = out.with_insight(format!(
            "Next delivery: {} from {}",
            next.product_name, next.supplier_name
        ));
    }

    out
}
