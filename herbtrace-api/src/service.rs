use async_trait::async_trait;

use crate::domain::InvocationRequest;
use crate::error::ContractResult;

/// Transport-neutral seam between the gateway and the ledger runtime.
///
/// An implementation may shell out to a peer CLI, call an SDK, or dispatch in-process;
/// the gateway only sees string arguments in and raw response bytes out.
#[async_trait]
pub trait LedgerInvoker: Send + Sync {
    /// Submit a transaction. Its write set is committed only when this returns `Ok`.
    async fn submit(&self, request: &InvocationRequest) -> ContractResult<Vec<u8>>;

    /// Evaluate a read-only query. Writes made while evaluating are discarded.
    async fn evaluate(&self, request: &InvocationRequest) -> ContractResult<Vec<u8>>;
}
