use std::sync::RwLock;

use chainsight_core::{QueryId, UserId};

use super::{QueryLog, QueryLogError, QueryRecord};

/// In-memory query log for tests/dev.
///
/// Records are kept in append order; "recent" walks that order backwards.
#[derive(Debug, Default)]
pub struct InMemoryQueryLog {
    inner: RwLock<Vec<QueryRecord>>,
}

impl InMemoryQueryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, QueryLogError> {
        Ok(self.inner.read().map_err(|_| poisoned())?.len())
    }

    pub fn is_empty(&self) -> Result<bool, QueryLogError> {
        Ok(self.len()? == 0)
    }
}

fn poisoned() -> QueryLogError {
    QueryLogError::Storage("query log lock poisoned".to_string())
}

impl QueryLog for InMemoryQueryLog {
    fn append(&self, record: QueryRecord) -> Result<(), QueryLogError> {
        let mut records = self.inner.write().map_err(|_| poisoned())?;
        if records.iter().any(|r| r.id == record.id) {
            return Err(QueryLogError::AlreadyExists(record.id));
        }
        records.push(record);
        Ok(())
    }

    fn get(&self, owner: UserId, id: QueryId) -> Result<Option<QueryRecord>, QueryLogError> {
        let records = self.inner.read().map_err(|_| poisoned())?;
        Ok(records
            .iter()
            .find(|r| r.id == id && r.owner == owner)
            .cloned())
    }

    fn recent(&self, owner: UserId, limit: usize) -> Result<Vec<QueryRecord>, QueryLogError> {
        let records = self.inner.read().map_err(|_| poisoned())?;
        Ok(records
            .iter()
            .rev()
            .filter(|r| r.owner == owner)
            .take(limit)
            .cloned()
            .collect())
    }
}
