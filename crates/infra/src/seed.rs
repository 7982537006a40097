//! Bundled sample data set for development and demos.

use chrono::{DateTime, Duration, Utc};

use chainsight_alerts::{Alert, AlertKind, AlertSeverity};
use chainsight_analysis::Snapshot;
use chainsight_core::{AlertId, DomainResult, InventoryId, Money, ProductId, ShipmentId, SupplierId};
use chainsight_inventory::InventoryRecord;
use chainsight_products::Product;
use chainsight_shipments::{Shipment, ShipmentStatus};
use chainsight_suppliers::Supplier;

/// A small but complete supply chain, dated relative to `now`.
///
/// Three suppliers (85, 92, 78), four products, one delayed shipment held in
/// customs and one product below its reorder point.
pub fn sample_snapshot(now: DateTime<Utc>) -> DomainResult<Snapshot> {
    let techcorp = Supplier::new(SupplierId::new(), "TechCorp Industries", 85)?
        .with_location("Shenzhen, China")
        .with_average_delivery_days(14)
        .with_contact_email("orders@techcorp.example");
    let global = Supplier::new(SupplierId::new(), "Global Parts Co", 92)?
        .with_location("Chicago, USA")
        .with_average_delivery_days(5)
        .with_contact_email("supply@globalparts.example");
    let pacific = Supplier::new(SupplierId::new(), "Pacific Components", 78)?
        .with_location("Osaka, Japan")
        .with_average_delivery_days(10)
        .with_contact_email("sales@pacificcomp.example");

    let sensor = Product::new(ProductId::new(), "SNS-4410", "Industrial Sensor", techcorp.id)?
        .with_category("Electronics")
        .with_unit_price(Money::parse_dollars("89.99")?)
        .with_reorder_policy(50, 200);
    let valve = Product::new(ProductId::new(), "VLV-2200", "Control Valve", global.id)?
        .with_category("Hydraulics")
        .with_unit_price(Money::parse_dollars("145.50")?)
        .with_reorder_policy(20, 60);
    let bearing = Product::new(ProductId::new(), "BRG-0608", "Ball Bearing 608", pacific.id)?
        .with_category("Mechanical")
        .with_unit_price(Money::parse_dollars("2.35")?)
        .with_reorder_policy(500, 2000);
    let harness = Product::new(ProductId::new(), "WHR-1200", "Wiring Harness", techcorp.id)?
        .with_category("Electronics")
        .with_unit_price(Money::parse_dollars("34.00")?)
        .with_reorder_policy(40, 120);

    let inventory = vec![
        InventoryRecord::new(InventoryId::new(), sensor.id, 50, 15, "Warehouse A - Bay 3", now),
        InventoryRecord::new(InventoryId::new(), valve.id, 85, 10, "Warehouse B - Bay 1", now),
        InventoryRecord::new(InventoryId::new(), bearing.id, 2400, 300, "Warehouse A - Bay 7", now),
        InventoryRecord::new(InventoryId::new(), harness.id, 60, 12, "Warehouse C - Bay 2", now),
    ];

    let shipments = vec![
        Shipment::new(
            ShipmentId::new(),
            techcorp.id,
            sensor.id,
            200,
            now - Duration::days(12),
            now - Duration::days(2),
        )?
        .with_tracking_number("TC-88213-CN")
        .delayed("Customs clearance issues"),
        Shipment::new(
            ShipmentId::new(),
            global.id,
            valve.id,
            60,
            now - Duration::days(3),
            now + Duration::days(2),
        )?
        .with_tracking_number("GP-55102-US")
        .with_status(ShipmentStatus::InTransit),
        Shipment::new(
            ShipmentId::new(),
            pacific.id,
            bearing.id,
            2000,
            now - Duration::days(1),
            now + Duration::days(9),
        )?,
        Shipment::new(
            ShipmentId::new(),
            global.id,
            valve.id,
            40,
            now - Duration::days(20),
            now - Duration::days(15),
        )?
        .delivered_at(now - Duration::days(14)),
    ];

    let alerts = vec![
        Alert::new(
            AlertId::new(),
            AlertKind::ReorderNeeded,
            AlertSeverity::High,
            "Industrial Sensor is below its reorder point",
            now - Duration::hours(6),
        )
        .for_product(sensor.id),
        Alert::new(
            AlertId::new(),
            AlertKind::SupplierDelay,
            AlertSeverity::Medium,
            "TechCorp Industries shipment held in customs",
            now - Duration::days(1),
        )
        .for_supplier(techcorp.id),
        Alert::new(
            AlertId::new(),
            AlertKind::QualityIssue,
            AlertSeverity::Low,
            "Minor finish defects on last bearing batch",
            now - Duration::days(16),
        )
        .for_product(bearing.id)
        .for_supplier(pacific.id)
        .resolved(),
    ];

    Ok(Snapshot {
        suppliers: vec![techcorp, global, pacific],
        products: vec![sensor, valve, bearing, harness],
        inventory,
        shipments,
        alerts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainsight_analysis::DashboardStats;

    #[test]
    fn sample_data_builds() {
        let snapshot = sample_snapshot(Utc::now()).unwrap();
        assert_eq!(snapshot.suppliers.len(), 3);
        assert_eq!(snapshot.products.len(), 4);
    }

    #[test]
    fn sample_dashboard_numbers() {
        let stats = DashboardStats::compute(&sample_snapshot(Utc::now()).unwrap());
        assert_eq!(stats.total_suppliers, 3);
        assert_eq!(stats.total_products, 4);
        assert_eq!(stats.active_shipments, 2);
        assert_eq!(stats.delayed_shipments, 1);
        assert_eq!(stats.average_reliability, 85);
        assert_eq!(stats.active_alerts, 2);
    }

    #[test]
    fn every_reference_resolves() {
        let snapshot = sample_snapshot(Utc::now()).unwrap();
        for line in snapshot.shipment_lines() {
            assert_ne!(line.supplier_name, chainsight_analysis::UNKNOWN);
            assert_ne!(line.product_name, chainsight_analysis::UNKNOWN);
        }
        assert!(snapshot.inventory_lines().iter().all(|l| l.product.is_some()));
    }
}
