use async_trait::async_trait;
use herbtrace_db::repository::transaction_context::{KeyValue, StateQueryIterator};
use parking_lot::RwLock;
use std::error::Error;
use std::ops::Bound;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::memory_transaction::ReadSet;
use super::memory_world_state::CommittedState;

/// Cursor over `[start_key, end_key)` of committed state.
///
/// Entries are fetched one at a time by seeking past the last key returned, so
/// commits landing mid-scan are visible to the rest of the scan. Each yielded key is
/// added to the owning transaction's read set.
///
/// The cursor holds a slot in the world state's open-iterator count until
/// [`close`](StateQueryIterator::close) is called; dropping it does not release the slot.
pub struct MemoryStateIterator {
    committed: Arc<RwLock<CommittedState>>,
    start_key: String,
    end_key: String,
    last_key: Option<String>,
    read_set: ReadSet,
    open_iterators: Arc<AtomicUsize>,
    closed: bool,
}

impl MemoryStateIterator {
    pub(crate) fn new(
        committed: Arc<RwLock<CommittedState>>,
        start_key: String,
        end_key: String,
        read_set: ReadSet,
        open_iterators: Arc<AtomicUsize>,
    ) -> Self {
        Self {
            committed,
            start_key,
            end_key,
            last_key: None,
            read_set,
            open_iterators,
            closed: false,
        }
    }

    fn lower_bound(&self) -> Bound<&str> {
        match &self.last_key {
            Some(last_key) => Bound::Excluded(last_key.as_str()),
            None if self.start_key.is_empty() => Bound::Unbounded,
            None => Bound::Included(self.start_key.as_str()),
        }
    }

    fn upper_bound(&self) -> Bound<&str> {
        if self.end_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(self.end_key.as_str())
        }
    }

    /// `BTreeMap::range` panics on inverted bounds; treat them as an empty range
    fn is_exhausted(&self) -> bool {
        let upper = match self.upper_bound() {
            Bound::Excluded(upper) => upper,
            _ => return false,
        };
        match self.lower_bound() {
            Bound::Included(lower) | Bound::Excluded(lower) => lower >= upper,
            Bound::Unbounded => false,
        }
    }
}

#[async_trait]
impl StateQueryIterator for MemoryStateIterator {
    async fn next(&mut self) -> Result<Option<KeyValue>, Box<dyn Error + Send + Sync>> {
        if self.closed {
            return Err("iterator has been closed".into());
        }
        if self.is_exhausted() {
            return Ok(None);
        }

        let next = {
            let committed = self.committed.read();
            committed
                .entries
                .range::<str, _>((self.lower_bound(), self.upper_bound()))
                .next()
                .map(|(key, entry)| (key.clone(), entry.clone()))
        };

        match next {
            Some((key, entry)) => {
                self.read_set.lock().insert(key.clone(), Some(entry.version));
                self.last_key = Some(key.clone());
                Ok(Some(KeyValue {
                    key,
                    value: entry.value,
                }))
            }
            None => Ok(None),
        }
    }

    fn close(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if !self.closed {
            self.closed = true;
            self.open_iterators.fetch_sub(1, Ordering::SeqCst);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::world_state::MemoryWorldState;
    use herbtrace_db::repository::transaction_context::TransactionContext;
    use std::error::Error;

    async fn collect_keys(
        world_state: &MemoryWorldState,
        start_key: &str,
        end_key: &str,
    ) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
        let tx = world_state.begin();
        let mut iterator = tx.get_state_by_range(start_key, end_key).await?;
        let mut keys = Vec::new();
        while let Some(entry) = iterator.next().await? {
            keys.push(entry.key);
        }
        iterator.close()?;
        Ok(keys)
    }

    #[tokio::test]
    async fn test_unbounded_scan_follows_key_order() -> Result<(), Box<dyn Error + Send + Sync>> {
        let world_state = MemoryWorldState::new();
        for key in ["C", "A", "B", "AA"] {
            world_state.seed(key, key.as_bytes().to_vec());
        }

        let keys = collect_keys(&world_state, "", "").await?;

        assert_eq!(keys, vec!["A", "AA", "B", "C"]);
        assert_eq!(world_state.open_iterators(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_bounded_scan_excludes_end_key() -> Result<(), Box<dyn Error + Send + Sync>> {
        let world_state = MemoryWorldState::new();
        for key in ["A", "B", "C", "D"] {
            world_state.seed(key, key.as_bytes().to_vec());
        }

        assert_eq!(collect_keys(&world_state, "B", "D").await?, vec!["B", "C"]);
        assert!(collect_keys(&world_state, "D", "B").await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_unclosed_iterator_is_counted() -> Result<(), Box<dyn Error + Send + Sync>> {
        let world_state = MemoryWorldState::new();
        world_state.seed("A", b"1".to_vec());

        let tx = world_state.begin();
        let mut iterator = tx.get_state_by_range("", "").await?;
        assert!(iterator.next().await?.is_some());
        assert_eq!(world_state.open_iterators(), 1);

        iterator.close()?;
        iterator.close()?;
        assert_eq!(world_state.open_iterators(), 0);
        assert!(iterator.next().await.is_err());

        Ok(())
    }
}
