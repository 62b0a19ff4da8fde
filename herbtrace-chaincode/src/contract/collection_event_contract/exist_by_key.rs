use async_trait::async_trait;
use herbtrace_api::{ContractError, ContractResult};
use herbtrace_db::repository::exist_by_key::ExistByKey;
use herbtrace_db::repository::transaction_context::TransactionContext;

use super::repo_impl::CollectionEventContract;

impl CollectionEventContract {
    pub(super) async fn exist_by_key_impl(
        ctx: &dyn TransactionContext,
        batch_id: &str,
    ) -> ContractResult<bool> {
        let data = ctx
            .get_state(batch_id)
            .await
            .map_err(|e| ContractError::Store(format!("failed to read world state: {e}")))?;
        Ok(data.is_some_and(|bytes| !bytes.is_empty()))
    }
}

#[async_trait]
impl ExistByKey for CollectionEventContract {
    async fn exist_by_key(&self, ctx: &dyn TransactionContext, key: &str) -> ContractResult<bool> {
        Self::exist_by_key_impl(ctx, key).await
    }
}
