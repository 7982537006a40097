//! One analyzer per intent.
//!
//! Each analyzer is an [`Analyzer`](crate::intent::Analyzer): it reads the
//! snapshot, never writes, and always returns a result.

pub mod delay;
pub mod inventory;
pub mod overview;
pub mod reliability;
pub mod reorder;
pub mod shipment;
