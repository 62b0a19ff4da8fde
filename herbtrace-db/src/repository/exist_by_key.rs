use async_trait::async_trait;
use herbtrace_api::ContractResult;

use super::transaction_context::TransactionContext;

/// Contract trait for checking whether a record is filed under a key
///
/// A record exists iff the store returns a non-empty value for the key.
/// Side-effect free.
#[async_trait]
pub trait ExistByKey: Send + Sync {
    /// # Returns
    /// * `Ok(true)` - A non-empty value is stored under `key`
    /// * `Ok(false)` - Nothing (or an empty value) is stored under `key`
    /// * `Err(ContractError::Store)` - The underlying read failed
    async fn exist_by_key(&self, ctx: &dyn TransactionContext, key: &str) -> ContractResult<bool>;
}
