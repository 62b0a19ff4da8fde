use async_trait::async_trait;
use herbtrace_api::{ContractResult, InvocationRequest, LedgerInvoker};
use std::sync::Arc;

use crate::dispatcher::ChaincodeDispatcher;
use crate::world_state::MemoryWorldState;

/// [`LedgerInvoker`] that plays the host runtime in-process.
///
/// Every call runs in a fresh transaction. `submit` commits the write set only when the
/// contract returns `Ok`; `evaluate` never commits.
pub struct InProcessInvoker {
    world_state: Arc<MemoryWorldState>,
    dispatcher: Arc<ChaincodeDispatcher>,
}

impl InProcessInvoker {
    pub fn new(world_state: Arc<MemoryWorldState>, dispatcher: Arc<ChaincodeDispatcher>) -> Self {
        Self {
            world_state,
            dispatcher,
        }
    }
}

#[async_trait]
impl LedgerInvoker for InProcessInvoker {
    async fn submit(&self, request: &InvocationRequest) -> ContractResult<Vec<u8>> {
        let tx = self.world_state.begin();
        let payload = self.dispatcher.invoke(&tx, request).await?;
        let height = tx.commit()?;
        tracing::info!(height, "transaction committed");
        Ok(payload)
    }

    async fn evaluate(&self, request: &InvocationRequest) -> ContractResult<Vec<u8>> {
        let tx = self.world_state.begin();
        self.dispatcher.invoke(&tx, request).await
    }
}
