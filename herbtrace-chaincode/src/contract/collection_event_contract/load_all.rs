use async_trait::async_trait;
use herbtrace_api::{ContractError, ContractResult};
use herbtrace_db::models::harvest::CollectionEvent;
use herbtrace_db::repository::load_all::LoadAll;
use herbtrace_db::repository::scoped_iterator::ScopedIterator;
use herbtrace_db::repository::transaction_context::TransactionContext;

use super::repo_impl::CollectionEventContract;
use crate::config::ListPolicy;

impl CollectionEventContract {
    #[tracing::instrument(skip(ctx), fields(tx_id = %ctx.tx_id()))]
    pub(super) async fn load_all_impl(
        ctx: &dyn TransactionContext,
        list_policy: ListPolicy,
    ) -> ContractResult<Vec<CollectionEvent>> {
        let iterator = ctx
            .get_state_by_range("", "")
            .await
            .map_err(|e| ContractError::Store(format!("failed to get state from blockchain: {e}")))?;
        // Closed on drop, so early returns below release it too
        let mut scan = ScopedIterator::new(iterator);

        let mut events = Vec::new();
        let mut skipped = 0usize;
        while let Some(entry) = scan
            .next()
            .await
            .map_err(|e| ContractError::Store(format!("error iterating through blockchain data: {e}")))?
        {
            match CollectionEvent::from_ledger_bytes(&entry.value) {
                Ok(event) => events.push(event),
                Err(e) => match list_policy {
                    ListPolicy::AllOrNothing => {
                        return Err(ContractError::MalformedPayload(format!(
                            "failed to unmarshal event data under {}: {e}",
                            entry.key
                        )));
                    }
                    ListPolicy::SkipMalformed => {
                        tracing::warn!(key = %entry.key, error = %e, "skipping undecodable entry");
                        skipped += 1;
                    }
                },
            }
        }

        if let Err(e) = scan.close() {
            tracing::warn!(error = %e, "failed to close range iterator");
        }

        tracing::debug!(count = events.len(), skipped, "range scan complete");
        Ok(events)
    }
}

#[async_trait]
impl LoadAll<CollectionEvent> for CollectionEventContract {
    async fn load_all(&self, ctx: &dyn TransactionContext) -> ContractResult<Vec<CollectionEvent>> {
        Self::load_all_impl(ctx, self.config.list_policy).await
    }
}
