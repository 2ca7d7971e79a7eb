use crate::database::RecordStore;
use crate::error::{AppError, AppResult};
use crate::models::AssignmentRecord;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// In-process store keyed by `result_id`.
///
/// Used for `memory://` deployments and as the store in tests.
#[derive(Clone, Default)]
pub struct MemoryRecordStore {
    records: Arc<RwLock<HashMap<String, AssignmentRecord>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following `insert_all` fail until switched back.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Drops one record, as a retention policy would.
    pub async fn remove(&self, result_id: &str) -> bool {
        self.records.write().await.remove(result_id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn insert_all(&self, records: &[AssignmentRecord]) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::StoreWriteFailure(
                "memory store rejected the batch".to_string(),
            ));
        }

        let mut map = self.records.write().await;

        // validate the whole batch before touching the map
        let mut batch_ids = HashSet::with_capacity(records.len());
        for record in records {
            if map.contains_key(&record.result_id) || !batch_ids.insert(&record.result_id) {
                return Err(AppError::StoreWriteFailure(format!(
                    "duplicate result_id {}",
                    record.result_id
                )));
            }
        }

        for record in records {
            map.insert(record.result_id.clone(), record.clone());
        }
        Ok(())
    }

    async fn find_by_result_id(&self, result_id: &str) -> AppResult<Option<AssignmentRecord>> {
        Ok(self.records.read().await.get(result_id).cloned())
    }
}
