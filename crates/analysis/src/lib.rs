//! `chainsight-analysis`
//!
//! **Responsibility:** the rule-based query-analysis engine.
//!
//! - Classifies a free-text question into one of six fixed intents.
//! - Runs the matching analyzer over an immutable [`Snapshot`].
//! - Returns a narrative response with ordered insights and recommendations.
//!
//! Everything here is a pure function of its inputs: no IO, no clock reads,
//! no writes back to the records it inspects. Persisting the outcome is the
//! caller's job.

pub mod analyzers;
pub mod composer;
pub mod intent;
pub mod provider;
pub mod result;
pub mod snapshot;
pub mod stats;

#[cfg(test)]
mod fixtures;

pub use composer::{compose, Composition};
pub use intent::{classify, route, Analyzer, Intent, IntentRule, RULES};
pub use provider::{SnapshotError, SnapshotProvider};
pub use result::QueryAnalysis;
pub use snapshot::{InventoryLine, ShipmentLine, Snapshot, UNKNOWN};
pub use stats::{DashboardStats, InventorySummary};
