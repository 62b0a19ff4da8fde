use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use super::memory_transaction::MemoryTransactionContext;

#[derive(Debug, Clone)]
pub(crate) struct VersionedValue {
    pub value: Vec<u8>,
    /// Height of the commit that last wrote the key
    pub version: u64,
}

#[derive(Debug, Default)]
pub(crate) struct CommittedState {
    pub entries: BTreeMap<String, VersionedValue>,
    pub height: u64,
}

/// In-process world state with MVCC commit validation.
///
/// Keys are ordered lexicographically by byte. Each transaction reads the committed
/// state, stages its writes privately and only publishes them through
/// [`MemoryTransactionContext::commit`], which rejects the whole write set if any key
/// the transaction read has since been rewritten.
pub struct MemoryWorldState {
    pub(crate) committed: Arc<RwLock<CommittedState>>,
    pub(crate) open_iterators: Arc<AtomicUsize>,
    tx_counter: AtomicU64,
}

impl MemoryWorldState {
    pub fn new() -> Self {
        Self {
            committed: Arc::new(RwLock::new(CommittedState::default())),
            open_iterators: Arc::new(AtomicUsize::new(0)),
            tx_counter: AtomicU64::new(0),
        }
    }

    /// Start a transaction against the current committed state
    pub fn begin(&self) -> MemoryTransactionContext {
        let tx_number = self.tx_counter.fetch_add(1, Ordering::Relaxed) + 1;
        MemoryTransactionContext::new(
            format!("tx-{tx_number}"),
            self.committed.clone(),
            self.open_iterators.clone(),
        )
    }

    /// Write raw bytes straight into committed state, bypassing any contract.
    ///
    /// Used to load genesis data or bytes produced by another writer.
    pub fn seed(&self, key: impl Into<String>, value: Vec<u8>) {
        let mut committed = self.committed.write();
        committed.height += 1;
        let version = committed.height;
        committed
            .entries
            .insert(key.into(), VersionedValue { value, version });
    }

    /// Committed value under `key`, if any
    pub fn committed_value(&self, key: &str) -> Option<Vec<u8>> {
        self.committed
            .read()
            .entries
            .get(key)
            .map(|entry| entry.value.clone())
    }

    pub fn len(&self) -> usize {
        self.committed.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of commits applied so far
    pub fn height(&self) -> u64 {
        self.committed.read().height
    }

    /// Range iterators opened and not yet closed
    pub fn open_iterators(&self) -> usize {
        self.open_iterators.load(Ordering::SeqCst)
    }
}

impl Default for MemoryWorldState {
    fn default() -> Self {
        Self::new()
    }
}
