//! `chainsight-core` - shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! strongly-typed identifiers, the domain error model and monetary values.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AlertId, InventoryId, ProductId, QueryId, ShipmentId, SupplierId, UserId};
pub use value_object::{Money, ValueObject};
