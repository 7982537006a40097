use std::sync::RwLock;

use chainsight_analysis::{Snapshot, SnapshotError, SnapshotProvider};

/// In-memory snapshot source for tests/dev.
///
/// Readers get a clone, so an analysis in flight never observes a later write.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    inner: RwLock<Snapshot>,
}

impl InMemorySnapshotStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            inner: RwLock::new(snapshot),
        }
    }

    /// Replace the whole data set.
    pub fn replace(&self, snapshot: Snapshot) -> Result<(), SnapshotError> {
        let mut current = self.inner.write().map_err(|_| poisoned())?;
        *current = snapshot;
        Ok(())
    }

    /// Mutate the data set in place (e.g. to simulate the owning application).
    pub fn update<F>(&self, f: F) -> Result<(), SnapshotError>
    where
        F: FnOnce(&mut Snapshot),
    {
        let mut current = self.inner.write().map_err(|_| poisoned())?;
        f(&mut current);
        Ok(())
    }
}

fn poisoned() -> SnapshotError {
    SnapshotError::Unavailable("snapshot store lock poisoned".to_string())
}

impl SnapshotProvider for InMemorySnapshotStore {
    fn snapshot(&self) -> Result<Snapshot, SnapshotError> {
        let current = self.inner.read().map_err(|_| poisoned())?;
        Ok(current.clone())
    }
}
