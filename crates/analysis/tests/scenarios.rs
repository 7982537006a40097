//! End-to-end question scenarios over hand-built snapshots.

use chrono::{DateTime, Duration, TimeZone, Utc};

use chainsight_analysis::{compose, Intent, Snapshot};
use chainsight_core::{InventoryId, Money, ProductId, ShipmentId, SupplierId};
use chainsight_inventory::InventoryRecord;
use chainsight_products::Product;
use chainsight_shipments::{Shipment, ShipmentStatus};
use chainsight_suppliers::Supplier;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 9, 30, 0).unwrap()
}

fn supplier(name: &str, score: u8) -> Supplier {
    Supplier::new(SupplierId::new(), name, score).unwrap()
}

fn product(sku: &str, name: &str, supplier_id: SupplierId) -> Product {
    Product::new(ProductId::new(), sku, name, supplier_id).unwrap()
}

fn shipment(supplier_id: SupplierId, product_id: ProductId, eta_days: i64) -> Shipment {
    Shipment::new(
        ShipmentId::new(),
        supplier_id,
        product_id,
        250,
        now() - Duration::days(14),
        now() + Duration::days(eta_days),
    )
    .unwrap()
}

#[test]
fn scenario_a_delayed_shipment() {
    let acme = supplier("Acme Components", 88);
    let bolt = product("BLT-10", "Hex Bolt", acme.id);
    let snapshot = Snapshot {
        shipments: vec![
            shipment(acme.id, bolt.id, -1).delayed("Customs clearance issues"),
            shipment(acme.id, bolt.id, 4).with_status(ShipmentStatus::InTransit),
        ],
        suppliers: vec![acme],
        products: vec![bolt],
        ..Snapshot::default()
    };

    let c = compose("Which supplier is causing delays?", &snapshot, now());

    assert_eq!(c.intent, Intent::Delay);
    assert_eq!(c.analysis.response, "Found 1 delayed shipments.");
    assert_eq!(c.analysis.insights.len(), 2);
    assert!(c.analysis.insights[1].ends_with("Customs clearance issues"));
    assert_eq!(c.analysis.recommendations.len(), 2);
}

#[test]
fn scenario_b_reorder_value() {
    let acme = supplier("Acme Components", 88);
    let sensor = product("SNS-200", "Industrial Sensor", acme.id)
        .with_unit_price(Money::parse_dollars("89.99").unwrap())
        .with_reorder_policy(50, 200);
    let record = InventoryRecord::new(InventoryId::new(), sensor.id, 45, 10, "Dock 4", now());
    assert_eq!(record.available_stock, 35);

    let snapshot = Snapshot {
        inventory: vec![record],
        suppliers: vec![acme],
        products: vec![sensor],
        ..Snapshot::default()
    };
    assert!(snapshot.inventory_lines()[0].needs_reorder());

    let c = compose("What should I reorder this week?", &snapshot, now());

    assert_eq!(c.intent, Intent::Reorder);
    assert_eq!(c.analysis.response, "Found 1 items that need reordering.");
    assert!(c.analysis.insights.iter().any(|i| i.contains("17998")));
}

#[test]
fn scenario_c_reliability_without_laggards() {
    let snapshot = Snapshot {
        suppliers: vec![
            supplier("Acme Components", 85),
            supplier("Borealis Metals", 92),
            supplier("Cobalt Freight", 78),
        ],
        ..Snapshot::default()
    };

    let c = compose("Which suppliers have the lowest reliability?", &snapshot, now());

    assert_eq!(c.intent, Intent::Reliability);
    assert_eq!(c.analysis.response, "Average supplier reliability is 85%.");
    assert_eq!(c.analysis.insights, vec!["0 suppliers have reliability below 70%".to_string()]);
    assert!(c.analysis.recommendations.is_empty());
}

#[test]
fn scenario_d_empty_question() {
    let acme = supplier("Acme Components", 85);
    let bolt = product("BLT-10", "Hex Bolt", acme.id);
    let snapshot = Snapshot {
        suppliers: vec![acme],
        products: vec![bolt],
        ..Snapshot::default()
    };

    let c = compose("", &snapshot, now());

    assert_eq!(c.intent, Intent::Default);
    assert_eq!(
        c.analysis.insights,
        vec![
            "Total suppliers: 1".to_string(),
            "Total products: 1".to_string(),
            "Active shipments: 0".to_string(),
            "Active alerts: 0".to_string(),
        ]
    );
    assert_eq!(c.analysis.recommendations.len(), 2);
}

#[test]
fn same_question_and_snapshot_give_same_answer() {
    let snapshot = Snapshot {
        suppliers: vec![supplier("Acme Components", 40)],
        ..Snapshot::default()
    };
    let q = "How reliable are my suppliers?";
    assert_eq!(compose(q, &snapshot, now()), compose(q, &snapshot, now()));
}
