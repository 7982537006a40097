//! Inbound shipment records.

pub mod shipment;

pub use shipment::{Shipment, ShipmentStatus};
