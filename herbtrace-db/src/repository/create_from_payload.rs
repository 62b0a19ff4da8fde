use async_trait::async_trait;
use herbtrace_api::ContractResult;

use crate::models::keyed::Keyed;
use super::transaction_context::TransactionContext;

/// Contract trait for filing a new record from a JSON payload
///
/// Admission rules, checked in order:
/// 1. nothing is filed under `key` yet (`DuplicateKey`)
/// 2. `payload` decodes into `T` (`MalformedPayload`)
/// 3. the decoded record's own key equals `key` (`KeyMismatch`)
///
/// The validated record is re-encoded canonically before it is written.
#[async_trait]
pub trait CreateFromPayload<T: Keyed>: Send + Sync {
    /// # Returns
    /// * `Ok(T)` - The record as staged in the write set
    /// * `Err` - The first admission rule violated, or `Store` if the write failed
    async fn create_from_payload(
        &self,
        ctx: &dyn TransactionContext,
        key: &str,
        payload: &str,
    ) -> ContractResult<T>;
}
