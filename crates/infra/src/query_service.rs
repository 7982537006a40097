//! Question answering: snapshot read → analysis → query log write.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use chainsight_analysis::{compose, DashboardStats, Intent, Snapshot, SnapshotError, SnapshotProvider};
use chainsight_core::{QueryId, UserId};

use crate::query_log::{QueryLog, QueryLogError, QueryRecord};

#[derive(Debug, Error)]
pub enum QueryServiceError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Log(#[from] QueryLogError),
}

/// A logged answer plus the intent it was routed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnsweredQuery {
    pub intent: Intent,
    #[serde(flatten)]
    pub record: QueryRecord,
}

/// Runs the analysis engine against a snapshot source and records every answer.
///
/// The snapshot is read once per question. The log write happens after the
/// analysis and is not coupled to the read: records may change in between.
#[derive(Clone)]
pub struct QueryService {
    snapshots: Arc<dyn SnapshotProvider>,
    log: Arc<dyn QueryLog>,
}

impl QueryService {
    pub fn new(snapshots: Arc<dyn SnapshotProvider>, log: Arc<dyn QueryLog>) -> Self {
        Self { snapshots, log }
    }

    pub fn ask(&self, owner: UserId, question: &str) -> Result<AnsweredQuery, QueryServiceError> {
        self.ask_at(owner, question, Utc::now())
    }

    /// Answer `question` as of `now` and append the result to the log.
    pub fn ask_at(
        &self,
        owner: UserId,
        question: &str,
        now: DateTime<Utc>,
    ) -> Result<AnsweredQuery, QueryServiceError> {
        let snapshot = self.snapshot()?;
        let composition = compose(question, &snapshot, now);

        let record = QueryRecord::new(QueryId::new(), owner, question, composition.analysis, Utc::now());

        if let Err(e) = self.log.append(record.clone()) {
            warn!(owner = %owner, query = %record.id, error = %e, "failed to log answered query");
            return Err(e.into());
        }

        info!(
            owner = %owner,
            query = %record.id,
            intent = %composition.intent,
            insights = record.insights.len(),
            "query answered"
        );

        Ok(AnsweredQuery {
            intent: composition.intent,
            record,
        })
    }

    pub fn history(&self, owner: UserId, limit: usize) -> Result<Vec<QueryRecord>, QueryServiceError> {
        Ok(self.log.recent(owner, limit)?)
    }

    pub fn dashboard(&self) -> Result<DashboardStats, QueryServiceError> {
        Ok(DashboardStats::compute(&self.snapshot()?))
    }

    pub fn snapshot(&self) -> Result<Snapshot, QueryServiceError> {
        self.snapshots.snapshot().map_err(|e| {
            warn!(error = %e, "failed to read snapshot");
            QueryServiceError::from(e)
        })
    }
}

impl core::fmt::Debug for QueryService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QueryService").finish_non_exhaustive()
    }
}
