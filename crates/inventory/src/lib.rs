//! Inventory records (stock levels per product and warehouse).

pub mod record;

pub use record::InventoryRecord;
