use async_trait::async_trait;
use herbtrace_api::{ContractError, ContractResult};
use herbtrace_db::models::harvest::CollectionEvent;
use herbtrace_db::repository::load::Load;
use herbtrace_db::repository::transaction_context::TransactionContext;

use super::repo_impl::CollectionEventContract;

impl CollectionEventContract {
    pub(super) async fn load_impl(
        ctx: &dyn TransactionContext,
        batch_id: &str,
    ) -> ContractResult<CollectionEvent> {
        tracing::debug!(tx_id = %ctx.tx_id(), batch_id, "reading collection event");

        let bytes = ctx
            .get_state(batch_id)
            .await
            .map_err(|e| ContractError::Store(format!("failed to read from world state: {e}")))?
            .filter(|bytes| !bytes.is_empty())
            .ok_or_else(|| ContractError::NotFound(batch_id.to_string()))?;

        CollectionEvent::from_ledger_bytes(&bytes).map_err(|e| {
            ContractError::MalformedPayload(format!("stored value for {batch_id} does not decode: {e}"))
        })
    }
}

#[async_trait]
impl Load<CollectionEvent> for CollectionEventContract {
    async fn load(&self, ctx: &dyn TransactionContext, key: &str) -> ContractResult<CollectionEvent> {
        Self::load_impl(ctx, key).await
    }
}
