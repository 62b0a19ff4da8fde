use async_trait::async_trait;

/// One entry yielded by a range scan over world state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

/// Capability handed to the contract by the host ledger runtime for one invocation
///
/// This trait is the only way contract code reaches world state. Implementations decide
/// how reads are versioned and when writes become visible; the contract assumes nothing
/// beyond the three calls below.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl TransactionContext for FabricStub {
///     async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait TransactionContext: Send + Sync {
    /// Identifier of the transaction this context belongs to
    fn tx_id(&self) -> &str;

    /// Fetch the committed value stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(bytes))` - The stored value
    /// * `Ok(None)` - Nothing is stored under the key
    /// * `Err` - The state store could not be read
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, Box<dyn std::error::Error + Send + Sync>>;

    /// Stage `value` under `key` in the transaction's write set
    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Open a forward-only iterator over `[start_key, end_key)` in the store's key order
    ///
    /// An empty `start_key` or `end_key` leaves that side of the range unbounded.
    /// The caller owns the iterator and must close it.
    async fn get_state_by_range(
        &self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Box<dyn StateQueryIterator>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Lazy, single-pass cursor over a range of world state
#[async_trait]
pub trait StateQueryIterator: Send {
    /// Advance the cursor. `Ok(None)` once the range is exhausted.
    async fn next(&mut self) -> Result<Option<KeyValue>, Box<dyn std::error::Error + Send + Sync>>;

    /// Release the store-side resources held by the cursor
    fn close(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
