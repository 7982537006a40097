//! Supplier records.
//!
//! Suppliers are owned and mutated by the surrounding application; this crate
//! only defines their shape and the invariants every snapshot relies on.

pub mod supplier;

pub use supplier::{ReliabilityScore, Supplier, SupplierStatus};
