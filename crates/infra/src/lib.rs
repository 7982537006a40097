//! Infrastructure layer: snapshot source, query log, configuration and the
//! service that ties the analysis engine to them.

pub mod config;
pub mod query_log;
pub mod query_service;
pub mod seed;
pub mod snapshot_store;

pub use config::{AppConfig, ConfigError};
pub use query_log::{InMemoryQueryLog, QueryLog, QueryLogError, QueryRecord};
pub use query_service::{AnsweredQuery, QueryService, QueryServiceError};
pub use snapshot_store::InMemorySnapshotStore;
