use herbtrace_api::ContractResult;
use herbtrace_db::models::harvest::CollectionEvent;
use herbtrace_db::repository::{CreateFromPayload, ExistByKey, Load, LoadAll, TransactionContext};

use crate::config::ContractConfig;

/// Ledger contract for collection events.
///
/// Holds configuration only. Every call consults world state afresh through the
/// transaction context it is handed, so one instance can serve concurrent invocations.
#[derive(Debug, Clone, Default)]
pub struct CollectionEventContract {
    pub config: ContractConfig,
}

impl CollectionEventContract {
    pub fn new(config: ContractConfig) -> Self {
        Self { config }
    }

    pub async fn event_exists(&self, ctx: &dyn TransactionContext, batch_id: &str) -> ContractResult<bool> {
        self.exist_by_key(ctx, batch_id).await
    }

    pub async fn create_collection_event(
        &self,
        ctx: &dyn TransactionContext,
        batch_id: &str,
        event_json: &str,
    ) -> ContractResult<CollectionEvent> {
        self.create_from_payload(ctx, batch_id, event_json).await
    }

    pub async fn read_collection_event(
        &self,
        ctx: &dyn TransactionContext,
        batch_id: &str,
    ) -> ContractResult<CollectionEvent> {
        self.load(ctx, batch_id).await
    }

    pub async fn get_all_blockchain_events(
        &self,
        ctx: &dyn TransactionContext,
    ) -> ContractResult<Vec<CollectionEvent>> {
        self.load_all(ctx).await
    }
}
