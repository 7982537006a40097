//! Keyword-based intent classification and routing.
//!
//! Intents are resolved by walking [`RULES`] in order; the first rule with a
//! keyword contained in the lowercased question wins. Keyword sets overlap on
//! purpose ("stock" routes to reorder before "stock level" can reach
//! inventory), so the order of the table *is* the tie-break.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analyzers;
use crate::result::QueryAnalysis;
use crate::snapshot::Snapshot;

/// Analyzer signature: pure function of the snapshot and the evaluation instant.
pub type Analyzer = fn(&Snapshot, DateTime<Utc>) -> QueryAnalysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Delay,
    Reorder,
    Reliability,
    Inventory,
    Shipment,
    Default,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Delay => "delay",
            Intent::Reorder => "reorder",
            Intent::Reliability => "reliability",
            Intent::Inventory => "inventory",
            Intent::Shipment => "shipment",
            Intent::Default => "default",
        }
    }
}

impl core::fmt::Display for Intent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One routing entry: a keyword predicate paired with the analyzer it selects.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    /// Lowercase substrings; an empty list matches every question.
    pub keywords: &'static [&'static str],
    pub analyzer: Analyzer,
}

impl IntentRule {
    /// `question` must already be lowercased.
    pub fn matches(&self, question: &str) -> bool {
        self.keywords.is_empty() || self.keywords.iter().any(|k| question.contains(k))
    }
}

/// Routing table in priority order. The last entry is the catch-all.
pub const RULES: [IntentRule; 6] = [
    IntentRule {
        intent: Intent::Delay,
        keywords: &["delay", "delayed"],
        analyzer: analyzers::delay::analyze,
    },
    IntentRule {
        intent: Intent::Reorder,
        keywords: &["reorder", "stock"],
        analyzer: analyzers::reorder::analyze,
    },
    IntentRule {
        intent: Intent::Reliability,
        keywords: &["reliability", "reliable"],
        analyzer: analyzers::reliability::analyze,
    },
    IntentRule {
        intent: Intent::Inventory,
        keywords: &["inventory", "stock level"],
        analyzer: analyzers::inventory::analyze,
    },
    IntentRule {
        intent: Intent::Shipment,
        keywords: &["shipment", "delivery"],
        analyzer: analyzers::shipment::analyze,
    },
    IntentRule {
        intent: Intent::Default,
        keywords: &[],
        analyzer: analyzers::overview::analyze,
    },
];

/// Select the first matching rule for `question` (case-insensitive).
pub fn route(question: &str) -> &'static IntentRule {
    let q = question.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&q))
        .unwrap_or(&RULES[RULES.len() - 1])
}

pub fn classify(question: &str) -> Intent {
    route(question).intent
}
