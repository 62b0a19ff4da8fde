pub mod chaincode;
pub mod config;
pub mod contract;
pub mod dispatcher;
pub mod gateway;
pub mod world_state;

pub use chaincode::HerbtraceChaincode;
pub use config::{ContractConfig, ListPolicy};
pub use contract::CollectionEventContract;
pub use dispatcher::ChaincodeDispatcher;
pub use gateway::{CollectionEventGateway, InProcessInvoker};
pub use world_state::{MemoryTransactionContext, MemoryWorldState};

#[cfg(test)]
pub mod test_helper;
