use async_trait::async_trait;
use herbtrace_api::ContractResult;

use crate::models::keyed::Keyed;
use super::transaction_context::TransactionContext;

/// Contract trait for enumerating every record in world state
///
/// Records come back in the store's native key order; implementations do not re-sort.
/// An empty store yields an empty vector.
#[async_trait]
pub trait LoadAll<T: Keyed>: Send + Sync {
    async fn load_all(&self, ctx: &dyn TransactionContext) -> ContractResult<Vec<T>>;
}
