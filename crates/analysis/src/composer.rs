use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::intent::{self, Intent};
use crate::result::QueryAnalysis;
use crate::snapshot::Snapshot;

/// A routed question and the unmodified output of its analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    pub intent: Intent,
    pub analysis: QueryAnalysis,
}

/// Classify `question`, run the selected analyzer over `snapshot`, and return its result.
///
/// `now` anchors time-relative analyzers (upcoming deliveries). Callers pass it
/// explicitly so the same inputs always produce the same output.
pub fn compose(question: &str, snapshot: &Snapshot, now: DateTime<Utc>) -> Composition {
    let rule = intent::route(question);
    let analysis = (rule.analyzer)(snapshot, now);

    debug!(
        intent = %rule.intent,
        insights = analysis.insights.len(),
        recommendations = analysis.recommendations.len(),
        "question analyzed"
    );

    Composition {
        intent: rule.intent,
        analysis,
    }
}
