use std::sync::Arc;

use thiserror::Error;

use crate::snapshot::Snapshot;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot source unavailable: {0}")]
    Unavailable(String),

    #[error("snapshot is inconsistent: {0}")]
    Inconsistent(String),
}

/// Source of point-in-time snapshots.
///
/// This crate stays storage-agnostic: implementations live with the caller
/// (infra) and decide how "current as of read time" is achieved. A snapshot is
/// read once per question, before any analyzer runs.
pub trait SnapshotProvider: Send + Sync + 'static {
    fn snapshot(&self) -> Result<Snapshot, SnapshotError>;
}

impl<P> SnapshotProvider for Arc<P>
where
    P: SnapshotProvider + ?Sized,
{
    fn snapshot(&self) -> Result<Snapshot, SnapshotError> {
        (**self).snapshot()
    }
}
