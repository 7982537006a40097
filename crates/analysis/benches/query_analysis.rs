use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chainsight_analysis::{classify, compose, Snapshot};
use chainsight_core::{InventoryId, Money, ProductId, ShipmentId, SupplierId};
use chainsight_inventory::InventoryRecord;
use chainsight_products::Product;
use chainsight_shipments::Shipment;
use chainsight_suppliers::Supplier;

fn snapshot_of(size: usize) -> Snapshot {
    let now = Utc::now();
    let mut snapshot = Snapshot::default();

    for i in 0..size {
        let supplier = Supplier::new(SupplierId::new(), format!("Supplier {i}"), (i % 101) as u8).unwrap();
        let product = Product::new(ProductId::new(), format!("SKU-{i}"), format!("Product {i}"), supplier.id)
            .unwrap()
            .with_unit_price(Money::from_cents(1000 + i as u64))
            .with_reorder_policy(50, 100);

        snapshot.inventory.push(InventoryRecord::new(
            InventoryId::new(),
            product.id,
            (i % 120) as i64,
            0,
            "Main",
            now,
        ));

        let shipment = Shipment::new(
            ShipmentId::new(),
            supplier.id,
            product.id,
            10,
            now - Duration::days(3),
            now + Duration::days((i % 10) as i64),
        )
        .unwrap();
        snapshot.shipments.push(if i % 7 == 0 { shipment.delayed("Weather") } else { shipment });

        snapshot.suppliers.push(supplier);
        snapshot.products.push(product);
    }

    snapshot
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_default_fallthrough", |b| {
        b.iter(|| classify(black_box("Tell me something about my business this quarter")))
    });
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let now = Utc::now();

    for size in [100usize, 1_000, 10_000] {
        let snapshot = snapshot_of(size);
        for question in ["any delays?", "what should I reorder?", "upcoming shipment"] {
            group.bench_with_input(BenchmarkId::new(question, size), &snapshot, |b, s| {
                b.iter(|| compose(black_box(question), s, now))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_compose);
criterion_main!(benches);
