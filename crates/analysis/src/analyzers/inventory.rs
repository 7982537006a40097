use chrono::{DateTime, Utc};

use crate::result::QueryAnalysis;
use crate::snapshot::Snapshot;
use crate::stats::InventorySummary;

pub fn analyze(snapshot: &Snapshot, _now: DateTime<Utc>) -> QueryAnalysis {
    let summary = InventorySummary::compute(&snapshot.inventory_lines());

    let mut out = QueryAnalysis::new(format!(
        "Inventory overview: {} items tracked, {} need reordering, {} out of stock.",
        summary.total_items, summary.low_stock_count, summary.out_of_stock_count
    ))
    .with_insight(format!(
        "{:.1}% of items need reordering",
        summary.low_stock_percentage()
    ));

    if summary.out_of_stock_count > 0 {
        out = out
            .with_insight(format!(
                "{} items are completely out of stock",
                summary.out_of_stock_count
            ))
            .with_recommendation("Expedite replenishment for out-of-stock items");
    }

    out
}
