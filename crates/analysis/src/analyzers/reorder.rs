use chrono::{DateTime, Utc};

use chainsight_core::Money;

use crate::result::QueryAnalysis;
use crate::snapshot::Snapshot;

pub fn analyze(snapshot: &Snapshot, _now: DateTime<Utc>) -> QueryAnalysis {
    let lines = snapshot.inventory_lines();
    let due: Vec<_> = lines.iter().filter(|l| l.needs_reorder()).collect();

    if due.is_empty() {
        return QueryAnalysis::new("All inventory levels are above reorder points.");
    }

    let value: Money = due.iter().map(|l| l.reorder_value()).sum();

    QueryAnalysis::new(format!("Found {} items that need reordering.", due.len()))
        .with_insight(format!("{} items are at or below their reorder point", due.len()))
        .with_insight(format!("Total value of items needing reorder: {value}"))
        .with_recommendation("Place purchase orders for items at or below their reorder point")
        .with_recommendation("Review reorder points for items that run low frequently")
}
