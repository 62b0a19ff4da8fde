use std::sync::Arc;

use crate::config::{ConfigError, ContractConfig};
use crate::contract::CollectionEventContract;
use crate::dispatcher::ChaincodeDispatcher;
use crate::gateway::{CollectionEventGateway, InProcessInvoker};
use crate::world_state::MemoryWorldState;

/// Entry point wiring the contract, its dispatcher and the in-process gateway.
///
/// Build once per process and share; it holds no ledger state of its own.
pub struct HerbtraceChaincode {
    dispatcher: Arc<ChaincodeDispatcher>,
}

impl HerbtraceChaincode {
    pub fn new(config: ContractConfig) -> Self {
        let contract = CollectionEventContract::new(config);
        Self {
            dispatcher: Arc::new(ChaincodeDispatcher::new(contract)),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ContractConfig::from_env()?))
    }

    pub fn contract(&self) -> &CollectionEventContract {
        self.dispatcher.contract()
    }

    pub fn dispatcher(&self) -> Arc<ChaincodeDispatcher> {
        self.dispatcher.clone()
    }

    /// Invoker that runs each call as one transaction against `world_state`
    pub fn in_process_invoker(&self, world_state: Arc<MemoryWorldState>) -> InProcessInvoker {
        InProcessInvoker::new(world_state, self.dispatcher.clone())
    }

    /// Gateway submitting through an [`InProcessInvoker`] over `world_state`
    pub fn in_process_gateway(&self, world_state: Arc<MemoryWorldState>) -> CollectionEventGateway {
        CollectionEventGateway::new(Arc::new(self.in_process_invoker(world_state)))
    }
}

impl Default for HerbtraceChaincode {
    fn default() -> Self {
        Self::new(ContractConfig::default())
    }
}
