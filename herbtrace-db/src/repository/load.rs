use async_trait::async_trait;
use herbtrace_api::ContractResult;

use crate::models::keyed::Keyed;
use super::transaction_context::TransactionContext;

/// Contract trait for point lookups by key
#[async_trait]
pub trait Load<T: Keyed>: Send + Sync {
    /// # Returns
    /// * `Ok(T)` - The decoded record
    /// * `Err(ContractError::NotFound)` - Nothing is filed under `key`
    /// * `Err(ContractError::MalformedPayload)` - The stored bytes do not decode
    /// * `Err(ContractError::Store)` - The underlying read failed
    async fn load(&self, ctx: &dyn TransactionContext, key: &str) -> ContractResult<T>;
}
