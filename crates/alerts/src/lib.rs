//! Operational alerts raised against products and suppliers.

pub mod alert;

pub use alert::{Alert, AlertKind, AlertSeverity};
