//! Aggregation helpers shared by the analyzers and the dashboard.
//!
//! Every helper is total: empty inputs produce a defined value (zero, `None`)
//! rather than a division by zero.

use serde::{Deserialize, Serialize};

use chainsight_shipments::{Shipment, ShipmentStatus};
use chainsight_suppliers::Supplier;

use crate::snapshot::{InventoryLine, Snapshot};

/// Suppliers scoring strictly below this are considered low-reliability.
pub const LOW_RELIABILITY_THRESHOLD: u8 = 70;

/// Mean reliability score rounded half-up to the nearest integer.
///
/// `None` when there are no suppliers.
pub fn average_reliability(suppliers: &[Supplier]) -> Option<u32> {
    if suppliers.is_empty() {
        return None;
    }
    let n = suppliers.len() as u64;
    let sum: u64 = suppliers
        .iter()
        .map(|s| u64::from(s.reliability_score.value()))
        .sum();
    // floor(sum / n + 1/2) in integers.
    Some(((2 * sum + n) / (2 * n)) as u32)
}

/// Suppliers below [`LOW_RELIABILITY_THRESHOLD`], in snapshot order (not sorted by score).
pub fn low_reliability(suppliers: &[Supplier]) -> Vec<&Supplier> {
    suppliers
        .iter()
        .filter(|s| s.reliability_score.value() < LOW_RELIABILITY_THRESHOLD)
        .collect()
}

pub fn active_shipment_count(shipments: &[Shipment]) -> usize {
    shipments.iter().filter(|s| s.is_active()).count()
}

pub fn delayed_shipment_count(shipments: &[Shipment]) -> usize {
    shipments
        .iter()
        .filter(|s| s.status == ShipmentStatus::Delayed)
        .count()
}

/// Most frequent value. Ties go to the value first seen in `values`.
pub fn most_common<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for v in values {
        match counts.iter_mut().find(|(seen, _)| *seen == v) {
            Some((_, n)) => *n += 1,
            None => counts.push((v, 1)),
        }
    }

    let mut best: Option<(&'a str, usize)> = None;
    for (v, n) in counts {
        if best.is_none_or(|(_, max)| n > max) {
            best = Some((v, n));
        }
    }
    best.map(|(v, _)| v)
}

/// `part / whole * 100`, or `0.0` when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Stock health counts over a set of inventory lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_items: usize,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
}

impl InventorySummary {
    pub fn compute(lines: &[InventoryLine<'_>]) -> Self {
        Self {
            total_items: lines.len(),
            low_stock_count: lines.iter().filter(|l| l.needs_reorder()).count(),
            out_of_stock_count: lines.iter().filter(|l| l.is_out_of_stock()).count(),
        }
    }

    pub fn low_stock_percentage(&self) -> f64 {
        percentage(self.low_stock_count, self.total_items)
    }
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_suppliers: usize,
    pub total_products: usize,
    pub active_shipments: usize,
    pub delayed_shipments: usize,
    /// Rounded mean reliability; `0` when there are no suppliers.
    pub average_reliability: u32,
    pub active_alerts: usize,
}

impl DashboardStats {
    pub fn compute(snapshot: &Snapshot) -> Self {
        Self {
            total_suppliers: snapshot.suppliers.len(),
            total_products: snapshot.products.len(),
            active_shipments: active_shipment_count(&snapshot.shipments),
            delayed_shipments: delayed_shipment_count(&snapshot.shipments),
            average_reliability: average_reliability(&snapshot.suppliers).unwrap_or(0),
            active_alerts: snapshot.active_alerts().count(),
        }
    }
}
