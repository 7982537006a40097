//! Snapshot builders shared by unit tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use chainsight_alerts::{Alert, AlertKind, AlertSeverity};
use chainsight_core::{AlertId, InventoryId, Money, ProductId, ShipmentId, SupplierId};
use chainsight_inventory::InventoryRecord;
use chainsight_products::Product;
use chainsight_shipments::{Shipment, ShipmentStatus};
use chainsight_suppliers::Supplier;

use crate::snapshot::Snapshot;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

pub fn supplier(name: &str, score: u8) -> Supplier {
    Supplier::new(SupplierId::new(), name, score).unwrap()
}

pub fn product(name: &str, supplier_id: SupplierId) -> Product {
    Product::new(ProductId::new(), format!("SKU-{name}"), name, supplier_id).unwrap()
}

pub fn inventory(product_id: ProductId, current: i64, reserved: i64) -> InventoryRecord {
    InventoryRecord::new(InventoryId::new(), product_id, current, reserved, "Warehouse A", now())
}

pub fn shipment(supplier_id: SupplierId, product_id: ProductId, expected_in: Duration) -> Shipment {
    let ordered = now() - Duration::days(10);
    Shipment::new(
        ShipmentId::new(),
        supplier_id,
        product_id,
        100,
        ordered,
        now() + expected_in,
    )
    .unwrap()
}

pub fn alert(kind: AlertKind) -> Alert {
    Alert::new(AlertId::new(), kind, AlertSeverity::Medium, "check", now())
}

/// One supplier, one product and one inventory record with the given levels.
pub fn single_inventory_item(
    available: i64,
    reorder_point: u32,
    reorder_quantity: u32,
    unit_price_cents: u64,
) -> (Snapshot, ProductId) {
    let s = supplier("TechCorp Industries", 85);
    let p = product("Industrial Sensor", s.id)
        .with_unit_price(Money::from_cents(unit_price_cents))
        .with_reorder_policy(reorder_point, reorder_quantity);
    let product_id = p.id;

    let snapshot = Snapshot {
        inventory: vec![inventory(product_id, available + 15, 15)],
        suppliers: vec![s],
        products: vec![p],
        ..Snapshot::default()
    };
    (snapshot, product_id)
}

/// Three suppliers (85, 92, 78), two shipments (one delayed through customs).
pub fn scenario_snapshot() -> Snapshot {
    let techcorp = supplier("TechCorp Industries", 85);
    let global = supplier("Global Parts Co", 92);
    let pacific = supplier("Pacific Components", 78);

    let sensor = product("Industrial Sensor", techcorp.id)
        .with_unit_price(Money::from_cents(8999))
        .with_reorder_policy(50, 200);
    let valve = product("Control Valve", global.id)
        .with_unit_price(Money::from_cents(4550))
        .with_reorder_policy(20, 100);

    let delayed = shipment(techcorp.id, sensor.id, Duration::days(-2))
        .delayed("Customs clearance issues");
    let in_transit = shipment(global.id, valve.id, Duration::days(3))
        .with_status(ShipmentStatus::InTransit);

    Snapshot {
        inventory: vec![inventory(sensor.id, 50, 15), inventory(valve.id, 80, 10)],
        shipments: vec![delayed, in_transit],
        alerts: vec![alert(AlertKind::LowStock), alert(AlertKind::SupplierDelay).resolved()],
        suppliers: vec![techcorp, global, pacific],
        products: vec![sensor, valve],
    }
}
