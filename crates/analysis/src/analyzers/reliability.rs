use chrono::{DateTime, Utc};

use crate::result::QueryAnalysis;
use crate::snapshot::Snapshot;
use crate::stats::{self, LOW_RELIABILITY_THRESHOLD};

pub fn analyze(snapshot: &Snapshot, _now: DateTime<Utc>) -> QueryAnalysis {
    let low = stats::low_reliability(&snapshot.suppliers);

    let response = match stats::average_reliability(&snapshot.suppliers) {
        Some(avg) => format!("Average supplier reliability is {avg}%."),
        None => "No suppliers found in the system.".to_string(),
    };

    let mut out = QueryAnalysis::new(response).with_insight(format!(
        "{} suppliers have reliability below {LOW_RELIABILITY_THRESHOLD}%",
        low.len()
    ));

    // First below-threshold supplier in snapshot order, not the minimum score.
    if let Some(first) = low.first() {
        out = out
            .with_insight(format!(
                "Lowest reliability supplier: {} ({})",
                first.name, first.reliability_score
            ))
            .with_recommendation("Review performance agreements with low-reliability suppliers")
            .with_recommendation("Diversify sourcing for products that depend on low-reliability suppliers");
    }

    out
}
