use serde::{Deserialize, Serialize};

/// Outcome of analyzing one question.
///
/// This is *not* a domain record. It is a narrative that higher layers may
/// persist (query log) or display without touching supply-chain state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    /// One-sentence answer.
    pub response: String,

    /// Supporting observations, most important first.
    pub insights: Vec<String>,

    /// Suggested actions, most important first.
    pub recommendations: Vec<String>,
}

impl QueryAnalysis {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            insights: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn with_insight(mut self, insight: impl Into<String>) -> Self {
        self.insights.push(insight.into());
        self
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendations.push(recommendation.into());
        self
    }
}
