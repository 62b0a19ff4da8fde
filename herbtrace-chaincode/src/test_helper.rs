//! Test helper module for per-test ledger isolation
//!
//! Each test gets its own empty in-memory world state, so nothing written by one
//! test is visible to another and no cleanup is needed.

use herbtrace_db::models::harvest::CollectionEvent;
use std::sync::Arc;

use crate::chaincode::HerbtraceChaincode;
use crate::config::ContractConfig;
use crate::contract::CollectionEventContract;
use crate::gateway::{CollectionEventGateway, InProcessInvoker};
use crate::world_state::{MemoryTransactionContext, MemoryWorldState};

/// Test context holding a private world state and the chaincode wired against it
pub struct TestContext {
    pub world_state: Arc<MemoryWorldState>,
    pub chaincode: HerbtraceChaincode,
}

impl TestContext {
    pub fn contract(&self) -> &CollectionEventContract {
        self.chaincode.contract()
    }

    /// Start a transaction; drop it to discard its writes
    pub fn begin(&self) -> MemoryTransactionContext {
        self.world_state.begin()
    }

    pub fn invoker(&self) -> InProcessInvoker {
        self.chaincode.in_process_invoker(self.world_state.clone())
    }

    pub fn gateway(&self) -> CollectionEventGateway {
        self.chaincode.in_process_gateway(self.world_state.clone())
    }

    /// Create `event` through the contract in its own transaction and commit it
    pub async fn commit_event(
        &self,
        event: &CollectionEvent,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let tx = self.begin();
        let payload = serde_json::to_string(event)?;
        self.contract()
            .create_collection_event(&tx, &event.batch_id, &payload)
            .await?;
        tx.commit()?;
        Ok(())
    }
}

/// Setup a test context with the default contract configuration
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context().await?;
///     let tx = ctx.begin();
///     // Perform test operations...
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    setup_test_context_with_config(ContractConfig::default()).await
}

pub async fn setup_test_context_with_config(
    config: ContractConfig,
) -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    Ok(TestContext {
        world_state: Arc::new(MemoryWorldState::new()),
        chaincode: HerbtraceChaincode::new(config),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::collection_event_contract::test_utils::create_test_collection_event;

    #[tokio::test]
    async fn test_contexts_are_isolated() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let first = setup_test_context().await?;
        first.commit_event(&create_test_collection_event("BATCH-001")).await?;

        let second = setup_test_context().await?;
        assert_eq!(first.world_state.len(), 1);
        assert!(second.world_state.is_empty());

        Ok(())
    }
}
