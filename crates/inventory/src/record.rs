use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chainsight_core::{Entity, InventoryId, ProductId};

/// Stock position of one product at one warehouse.
///
/// `available_stock` is stored, not derived on read. [`InventoryRecord::new`]
/// and [`InventoryRecord::set_levels`] keep it equal to
/// `current_stock - reserved_stock`, but a record deserialized from elsewhere
/// carries whatever its source wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: InventoryId,
    pub product_id: ProductId,
    pub current_stock: i64,
    pub reserved_stock: i64,
    pub available_stock: i64,
    pub warehouse_location: String,
    pub last_updated: DateTime<Utc>,
}

impl InventoryRecord {
    pub fn new(
        id: InventoryId,
        product_id: ProductId,
        current_stock: i64,
        reserved_stock: i64,
        warehouse_location: impl Into<String>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product_id,
            current_stock,
            reserved_stock,
            available_stock: current_stock - reserved_stock,
            warehouse_location: warehouse_location.into(),
            last_updated,
        }
    }

    /// Replace stock levels, recomputing availability.
    pub fn set_levels(&mut self, current_stock: i64, reserved_stock: i64, at: DateTime<Utc>) {
        self.current_stock = current_stock;
        self.reserved_stock = reserved_stock;
        self.available_stock = current_stock - reserved_stock;
        self.last_updated = at;
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.available_stock == 0
    }
}

impl Entity for InventoryRecord {
    type Id = InventoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(current: i64, reserved: i64) -> InventoryRecord {
        InventoryRecord::new(
            InventoryId::new(),
            ProductId::new(),
            current,
            reserved,
            "Warehouse A",
            Utc::now(),
        )
    }

    #[test]
    fn available_is_current_minus_reserved() {
        let r = record(50, 15);
        assert_eq!(r.available_stock, 35);
        assert!(!r.is_out_of_stock());
    }

    #[test]
    fn fully_reserved_stock_is_out_of_stock() {
        assert!(record(20, 20).is_out_of_stock());
    }

    #[test]
    fn set_levels_recomputes_availability() {
        let mut r = record(50, 15);
        let at = Utc::now();
        r.set_levels(10, 4, at);
        assert_eq!(r.available_stock, 6);
        assert_eq!(r.last_updated, at);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: constructed records always satisfy available = current - reserved.
            #[test]
            fn availability_invariant_holds(current in 0i64..1_000_000, reserved in 0i64..1_000_000) {
                let r = record(current, reserved);
                prop_assert_eq!(r.available_stock, r.current_stock - r.reserved_stock);
            }
        }
    }
}
