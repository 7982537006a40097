//! Point-in-time snapshot of the supply chain and the joins analyzers need.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use chainsight_alerts::Alert;
use chainsight_core::{Money, ProductId, SupplierId};
use chainsight_inventory::InventoryRecord;
use chainsight_products::Product;
use chainsight_shipments::Shipment;
use chainsight_suppliers::Supplier;

/// Placeholder label for a reference whose target is missing from the snapshot.
pub const UNKNOWN: &str = "Unknown";

/// Immutable read of every collection one analysis cycle looks at.
///
/// Collection order is the order the provider returned; analyzers that report
/// "the first" matching record rely on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub suppliers: Vec<Supplier>,
    pub products: Vec<Product>,
    pub inventory: Vec<InventoryRecord>,
    pub shipments: Vec<Shipment>,
    pub alerts: Vec<Alert>,
}

impl Snapshot {
    pub fn supplier(&self, id: SupplierId) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Unresolved alerts, in snapshot order.
    pub fn active_alerts(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| a.is_active())
    }

    /// Inventory records joined with their products, in snapshot order.
    pub fn inventory_lines(&self) -> Vec<InventoryLine<'_>> {
        let products = first_by_id(self.products.iter().map(|p| (p.id, p)));

        self.inventory
            .iter()
            .map(|record| InventoryLine {
                record,
                product: products.get(&record.product_id).copied(),
            })
            .collect()
    }

    /// Shipments joined with supplier and product names, in snapshot order.
    pub fn shipment_lines(&self) -> Vec<ShipmentLine<'_>> {
        let suppliers = first_by_id(self.suppliers.iter().map(|s| (s.id, s.name.as_str())));
        let products = first_by_id(self.products.iter().map(|p| (p.id, p.name.as_str())));

        self.shipments
            .iter()
            .map(|shipment| ShipmentLine {
                shipment,
                supplier_name: suppliers.get(&shipment.supplier_id).copied().unwrap_or(UNKNOWN),
                product_name: products.get(&shipment.product_id).copied().unwrap_or(UNKNOWN),
            })
            .collect()
    }
}

/// Index by id; on duplicate ids the earliest record wins.
fn first_by_id<K, V>(entries: impl Iterator<Item = (K, V)>) -> HashMap<K, V>
where
    K: Eq + core::hash::Hash,
{
    let mut map = HashMap::new();
    for (k, v) in entries {
        map.entry(k).or_insert(v);
    }
    map
}

/// An inventory record together with the product it stocks (if still present).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryLine<'a> {
    pub record: &'a InventoryRecord,
    pub product: Option<&'a Product>,
}

impl<'a> InventoryLine<'a> {
    /// `available_stock <= reorder_point`. A line without a product never needs reorder.
    pub fn needs_reorder(&self) -> bool {
        self.product
            .is_some_and(|p| self.record.available_stock <= i64::from(p.reorder_point))
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.record.is_out_of_stock()
    }

    /// Value of one replenishment order; zero when the product is missing.
    pub fn reorder_value(&self) -> Money {
        self.product.map_or(Money::ZERO, Product::reorder_value)
    }

    pub fn product_name(&self) -> &'a str {
        self.product.map_or(UNKNOWN, |p| p.name.as_str())
    }
}

/// A shipment with the display names of its supplier and product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipmentLine<'a> {
    pub shipment: &'a Shipment,
    pub supplier_name: &'a str,
    pub product_name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn inventory_line_joins_product_by_id() {
        let (snapshot, product_id) = fixtures::single_inventory_item(35, 50, 200, 8999);
        let lines = snapshot.inventory_lines();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product.map(|p| p.id), Some(product_id));
        assert!(lines[0].needs_reorder());
        assert_eq!(lines[0].reorder_value(), Money::from_cents(1_799_800));
    }

    #[test]
    fn stock_equal_to_reorder_point_needs_reorder() {
        let (snapshot, _) = fixtures::single_inventory_item(50, 50, 10, 100);
        assert!(snapshot.inventory_lines()[0].needs_reorder());
    }

    #[test]
    fn stock_above_reorder_point_does_not_need_reorder() {
        let (snapshot, _) = fixtures::single_inventory_item(51, 50, 10, 100);
        assert!(!snapshot.inventory_lines()[0].needs_reorder());
    }

    #[test]
    fn orphaned_inventory_degrades_to_unknown_product() {
        let (mut snapshot, _) = fixtures::single_inventory_item(0, 50, 200, 8999);
        snapshot.products.clear();
        let line = snapshot.inventory_lines()[0];

        assert!(line.product.is_none());
        assert!(!line.needs_reorder());
        assert_eq!(line.reorder_value(), Money::ZERO);
        assert_eq!(line.product_name(), UNKNOWN);
    }

    #[test]
    fn shipment_lines_fall_back_to_unknown_names() {
        let mut snapshot = fixtures::scenario_snapshot();
        snapshot.suppliers.clear();
        let lines = snapshot.shipment_lines();

        assert!(!lines.is_empty());
        assert!(lines.iter().all(|l| l.supplier_name == UNKNOWN));
        assert!(lines.iter().all(|l| l.product_name != UNKNOWN));
    }

    #[test]
    fn duplicate_product_ids_resolve_to_first_record() {
        let (mut snapshot, _) = fixtures::single_inventory_item(10, 50, 1, 100);
        let mut shadow = snapshot.products[0].clone();
        shadow.name = "Shadow".to_string();
        snapshot.products.push(shadow);

        assert_eq!(snapshot.inventory_lines()[0].product_name(), "Industrial Sensor");
    }
}
