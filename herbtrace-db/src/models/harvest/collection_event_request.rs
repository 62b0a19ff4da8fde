use serde::{Deserialize, Serialize};
use validator::Validate;

use super::collection_event::CollectionEvent;

/// Inbound create-request accepted by the gateway.
///
/// Carries every ledger field plus the handoff roles between two supply-chain actors.
/// The roles are not part of [`CollectionEvent`]; [`CollectionEventRequest::into_ledger_record`]
/// drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CollectionEventRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub event: CollectionEvent,

    #[validate(length(min = 1, message = "from_role is required"))]
    pub from_role: String,

    #[validate(length(min = 1, message = "to_role is required"))]
    pub to_role: String,
}

impl CollectionEventRequest {
    pub fn batch_id(&self) -> &str {
        &self.event.batch_id
    }

    /// Lossy mapping onto the persisted shape: `from_role` and `to_role` are discarded.
    pub fn into_ledger_record(self) -> CollectionEvent {
        self.event
    }
}
