use async_trait::async_trait;
use herbtrace_api::{ContractError, ContractResult};
use herbtrace_db::models::harvest::CollectionEvent;
use herbtrace_db::repository::create_from_payload::CreateFromPayload;
use herbtrace_db::repository::transaction_context::TransactionContext;

use super::repo_impl::CollectionEventContract;

impl CollectionEventContract {
    #[tracing::instrument(skip(ctx, event_json), fields(tx_id = %ctx.tx_id()))]
    pub(super) async fn create_from_payload_impl(
        ctx: &dyn TransactionContext,
        batch_id: &str,
        event_json: &str,
    ) -> ContractResult<CollectionEvent> {
        // 1. Reject keys that are already filed
        if Self::exist_by_key_impl(ctx, batch_id).await? {
            tracing::warn!("rejected write to existing key");
            return Err(ContractError::DuplicateKey(batch_id.to_string()));
        }

        // 2. Decode the payload
        let event = CollectionEvent::from_ledger_bytes(event_json.as_bytes()).map_err(|e| {
            ContractError::MalformedPayload(format!("failed to unmarshal event JSON: {e}"))
        })?;

        // 3. The payload must describe the key it is filed under
        if event.batch_id != batch_id {
            tracing::warn!(payload_batch_id = %event.batch_id, "rejected payload filed under another key");
            return Err(ContractError::KeyMismatch {
                argument: batch_id.to_string(),
                payload: event.batch_id,
            });
        }

        // 4. Stage the canonical encoding
        let bytes = event.to_ledger_bytes().map_err(|e| {
            ContractError::MalformedPayload(format!("failed to marshal event: {e}"))
        })?;
        ctx.put_state(batch_id, bytes)
            .await
            .map_err(|e| ContractError::Store(format!("failed to write world state: {e}")))?;

        tracing::info!(crop_id = %event.crop_id, "collection event staged");
        Ok(event)
    }
}

#[async_trait]
impl CreateFromPayload<CollectionEvent> for CollectionEventContract {
    async fn create_from_payload(
        &self,
        ctx: &dyn TransactionContext,
        key: &str,
        payload: &str,
    ) -> ContractResult<CollectionEvent> {
        Self::create_from_payload_impl(ctx, key, payload).await
    }
}
