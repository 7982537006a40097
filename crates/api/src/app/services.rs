use std::sync::Arc;

use chrono::Utc;

use chainsight_core::DomainResult;
use chainsight_infra::{
    seed, AppConfig, InMemoryQueryLog, InMemorySnapshotStore, QueryService,
};

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppServices {
    pub queries: QueryService,
    /// Default history page size.
    pub history_limit: usize,
}

impl AppServices {
    pub fn new(snapshots: Arc<InMemorySnapshotStore>, history_limit: usize) -> Self {
        let log = Arc::new(InMemoryQueryLog::new());
        Self {
            queries: QueryService::new(snapshots, log),
            history_limit,
        }
    }

    pub fn from_config(config: &AppConfig) -> DomainResult<Self> {
        let store = if config.seed_sample_data {
            tracing::info!("loading sample supply-chain data");
            InMemorySnapshotStore::new(seed::sample_snapshot(Utc::now())?)
        } else {
            InMemorySnapshotStore::default()
        };

        Ok(Self::new(Arc::new(store), config.history_limit))
    }
}
