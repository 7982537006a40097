use std::collections::HashSet;

use chrono::{DateTime, Utc};

use chainsight_shipments::ShipmentStatus;

use crate::result::QueryAnalysis;
use crate::snapshot::{Snapshot, UNKNOWN};
use crate::stats;

pub fn analyze(snapshot: &Snapshot, _now: DateTime<Utc>) -> QueryAnalysis {
    let lines = snapshot.shipment_lines();
    let delayed: Vec<_> = lines
        .iter()
        .filter(|l| l.shipment.status == ShipmentStatus::Delayed)
        .collect();

    if delayed.is_empty() {
        return QueryAnalysis::new("No delayed shipments found in the system.");
    }

    let suppliers: HashSet<&str> = delayed.iter().map(|l| l.supplier_name).collect();
    let reason = stats::most_common(delayed.iter().filter_map(|l| l.shipment.delay_reason()))
        .unwrap_or(UNKNOWN);

    QueryAnalysis::new(format!("Found {} delayed shipments.", delayed.len()))
        .with_insight(format!("{} suppliers have delayed shipments", suppliers.len()))
        .with_insight(format!("Most common delay reason: {reason}"))
        .with_recommendation("Contact suppliers with delayed shipments for updated delivery estimates")
        .with_recommendation("Consider alternate suppliers for critical items with repeated delays")
}
