use async_trait::async_trait;
use herbtrace_api::{ContractError, ContractResult};
use herbtrace_db::repository::transaction_context::{StateQueryIterator, TransactionContext};
use parking_lot::{Mutex, RwLock};
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::memory_iterator::MemoryStateIterator;
use super::memory_world_state::{CommittedState, VersionedValue};

/// Version of each key as observed by a transaction; `None` means it was absent
pub(crate) type ReadSet = Arc<Mutex<HashMap<String, Option<u64>>>>;

/// Transaction context over a [`MemoryWorldState`](super::MemoryWorldState).
///
/// Reads always see committed state, never the transaction's own staged writes.
/// Dropping the context without calling [`commit`](Self::commit) discards the write set.
pub struct MemoryTransactionContext {
    tx_id: String,
    committed: Arc<RwLock<CommittedState>>,
    open_iterators: Arc<AtomicUsize>,
    read_set: ReadSet,
    write_set: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryTransactionContext {
    pub(crate) fn new(
        tx_id: String,
        committed: Arc<RwLock<CommittedState>>,
        open_iterators: Arc<AtomicUsize>,
    ) -> Self {
        Self {
            tx_id,
            committed,
            open_iterators,
            read_set: Arc::new(Mutex::new(HashMap::new())),
            write_set: Mutex::new(BTreeMap::new()),
        }
    }

    /// Keys staged by this transaction
    pub fn staged_keys(&self) -> Vec<String> {
        self.write_set.lock().keys().cloned().collect()
    }

    /// Validate the read set and publish the write set atomically.
    ///
    /// # Returns
    /// * `Ok(height)` - The commit height assigned to the write set
    /// * `Err(ContractError::MvccConflict)` - A key read by this transaction was rewritten
    ///   by a commit that landed after the read; nothing is published
    pub fn commit(self) -> ContractResult<u64> {
        let mut committed = self.committed.write();

        for (key, seen_version) in self.read_set.lock().iter() {
            let current_version = committed.entries.get(key).map(|entry| entry.version);
            if current_version != *seen_version {
                tracing::warn!(tx_id = %self.tx_id, key = %key, "MVCC read conflict, write set discarded");
                return Err(ContractError::MvccConflict(key.clone()));
            }
        }

        let write_set = std::mem::take(&mut *self.write_set.lock());
        if write_set.is_empty() {
            return Ok(committed.height);
        }

        committed.height += 1;
        let version = committed.height;
        for (key, value) in write_set {
            committed.entries.insert(key, VersionedValue { value, version });
        }

        tracing::debug!(tx_id = %self.tx_id, height = version, "write set committed");
        Ok(version)
    }
}

#[async_trait]
impl TransactionContext for MemoryTransactionContext {
    fn tx_id(&self) -> &str {
        &self.tx_id
    }

    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, Box<dyn Error + Send + Sync>> {
        let committed = self.committed.read();
        let entry = committed.entries.get(key);
        self.read_set
            .lock()
            .insert(key.to_string(), entry.map(|entry| entry.version));
        Ok(entry.map(|entry| entry.value.clone()))
    }

    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), Box<dyn Error + Send + Sync>> {
        if key.is_empty() {
            return Err("empty key is not a valid key".into());
        }
        self.write_set.lock().insert(key.to_string(), value);
        Ok(())
    }

    async fn get_state_by_range(
        &self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Box<dyn StateQueryIterator>, Box<dyn Error + Send + Sync>> {
        self.open_iterators.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryStateIterator::new(
            self.committed.clone(),
            start_key.to_string(),
            end_key.to_string(),
            self.read_set.clone(),
            self.open_iterators.clone(),
        )))
    }
}
