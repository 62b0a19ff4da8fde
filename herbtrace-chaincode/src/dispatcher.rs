use herbtrace_api::{ContractError, ContractResult, InvocationRequest};
use herbtrace_db::repository::transaction_context::TransactionContext;

use crate::contract::CollectionEventContract;

pub const CREATE_COLLECTION_EVENT: &str = "CreateCollectionEvent";
pub const READ_COLLECTION_EVENT: &str = "ReadCollectionEvent";
pub const EVENT_EXISTS: &str = "EventExists";
pub const GET_ALL_BLOCKCHAIN_EVENTS: &str = "GetAllBlockchainEvents";

/// Routes string-argument invocations to the contract and encodes the results.
///
/// | function | args | response payload |
/// |---|---|---|
/// | `CreateCollectionEvent` | batch id, event JSON | empty |
/// | `ReadCollectionEvent` | batch id | record JSON |
/// | `EventExists` | batch id | `true` / `false` |
/// | `GetAllBlockchainEvents` | none | JSON array |
#[derive(Debug, Clone, Default)]
pub struct ChaincodeDispatcher {
    contract: CollectionEventContract,
}

impl ChaincodeDispatcher {
    pub fn new(contract: CollectionEventContract) -> Self {
        Self { contract }
    }

    pub fn contract(&self) -> &CollectionEventContract {
        &self.contract
    }

    pub async fn invoke(
        &self,
        ctx: &dyn TransactionContext,
        request: &InvocationRequest,
    ) -> ContractResult<Vec<u8>> {
        let (function, args) = request
            .split()
            .ok_or_else(|| ContractError::UnknownFunction(String::new()))?;
        tracing::debug!(tx_id = %ctx.tx_id(), function, args = args.len(), "dispatching invocation");

        match function {
            CREATE_COLLECTION_EVENT => {
                expect_args(function, args, 2)?;
                self.contract
                    .create_collection_event(ctx, &args[0], &args[1])
                    .await?;
                Ok(Vec::new())
            }
            READ_COLLECTION_EVENT => {
                expect_args(function, args, 1)?;
                let event = self.contract.read_collection_event(ctx, &args[0]).await?;
                encode(&event)
            }
            EVENT_EXISTS => {
                expect_args(function, args, 1)?;
                let exists = self.contract.event_exists(ctx, &args[0]).await?;
                encode(&exists)
            }
            GET_ALL_BLOCKCHAIN_EVENTS => {
                expect_args(function, args, 0)?;
                let events = self.contract.get_all_blockchain_events(ctx).await?;
                encode(&events)
            }
            other => Err(ContractError::UnknownFunction(other.to_string())),
        }
    }
}

fn expect_args(function: &str, args: &[String], expected: usize) -> ContractResult<()> {
    if args.len() != expected {
        return Err(ContractError::InvalidArguments {
            function: function.to_string(),
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

fn encode<T: serde::Serialize>(value: &T) -> ContractResult<Vec<u8>> {
    serde_json::to_vec(value)
        .map_err(|e| ContractError::MalformedPayload(format!("failed to encode response: {e}")))
}
