use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use gauchorecords_core::{Entity, RecordId};

use crate::{RecordStore, StoreError};

/// In-memory record store.
///
/// Intended for tests/dev. Iteration order is by id, so `find_all` is
/// stable within a call.
#[derive(Debug)]
pub struct MemoryRecordStore<E> {
    rows: RwLock<BTreeMap<i64, E>>,
    next_id: AtomicI64,
}

impl<E> Default for MemoryRecordStore<E> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<E> MemoryRecordStore<E> {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl<E: Entity> RecordStore<E> for MemoryRecordStore<E> {
    async fn save(&self, mut record: E) -> Result<E, StoreError> {
        let id = match record.id() {
            Some(id) => id,
            None => {
                let id = RecordId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
                record.set_id(id);
                id
            }
        };

        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        rows.insert(id.as_i64(), record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<E>, StoreError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        Ok(rows.get(&id.as_i64()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>, StoreError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        Ok(rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<(), StoreError> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        rows.remove(&id.as_i64());
        Ok(())
    }

    async fn exists_by_id(&self, id: RecordId) -> Result<bool, StoreError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        Ok(rows.contains_key(&id.as_i64()))
    }
}
