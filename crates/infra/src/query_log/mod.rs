//! Append-only log of answered questions.

pub mod in_memory;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use chainsight_analysis::QueryAnalysis;
use chainsight_core::{Entity, QueryId, UserId};

pub use in_memory::InMemoryQueryLog;

/// A question and the answer it received. Written once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRecord {
    pub id: QueryId,
    pub owner: UserId,
    pub question: String,
    pub response: String,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl QueryRecord {
    pub fn new(
        id: QueryId,
        owner: UserId,
        question: impl Into<String>,
        analysis: QueryAnalysis,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner,
            question: question.into(),
            response: analysis.response,
            insights: analysis.insights,
            recommendations: analysis.recommendations,
            timestamp,
        }
    }
}

impl Entity for QueryRecord {
    type Id = QueryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryLogError {
    #[error("query already logged: {0}")]
    AlreadyExists(QueryId),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Query log abstraction, partitioned by owning user.
pub trait QueryLog: Send + Sync {
    fn append(&self, record: QueryRecord) -> Result<(), QueryLogError>;

    fn get(&self, owner: UserId, id: QueryId) -> Result<Option<QueryRecord>, QueryLogError>;

    /// Most recent records first, at most `limit`.
    fn recent(&self, owner: UserId, limit: usize) -> Result<Vec<QueryRecord>, QueryLogError>;
}

impl<S> QueryLog for Arc<S>
where
    S: QueryLog + ?Sized,
{
    fn append(&self, record: QueryRecord) -> Result<(), QueryLogError> {
        (**self).append(record)
    }

    fn get(&self, owner: UserId, id: QueryId) -> Result<Option<QueryRecord>, QueryLogError> {
        (**self).get(owner, id)
    }

    fn recent(&self, owner: UserId, limit: usize) -> Result<Vec<QueryRecord>, QueryLogError> {
        (**self).recent(owner, limit)
    }
}
