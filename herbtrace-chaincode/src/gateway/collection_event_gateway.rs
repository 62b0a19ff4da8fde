use herbtrace_api::{
    ApiResponse, GatewayError, GatewayResponse, GatewayResult, InvocationRequest, LedgerInvoker,
    ResponseStatus,
};
use herbtrace_db::models::harvest::{CollectionEvent, CollectionEventRequest};
use std::sync::Arc;
use validator::Validate;

use crate::dispatcher::{CREATE_COLLECTION_EVENT, GET_ALL_BLOCKCHAIN_EVENTS};

/// Request handling behind `POST /collection-event` and `GET /collection-events`.
///
/// Transport-free: callers hand in decoded bodies and get back the status and envelope
/// to answer with.
pub struct CollectionEventGateway {
    invoker: Arc<dyn LedgerInvoker>,
}

impl CollectionEventGateway {
    pub fn new(invoker: Arc<dyn LedgerInvoker>) -> Self {
        Self { invoker }
    }

    /// Bind a raw JSON body, then handle it as [`create_collection_event`](Self::create_collection_event)
    pub async fn create_collection_event_from_json(
        &self,
        body: &str,
    ) -> GatewayResponse<CollectionEventRequest> {
        match serde_json::from_str::<CollectionEventRequest>(body) {
            Ok(request) => self.create_collection_event(request).await,
            Err(e) => GatewayResponse::new(
                ResponseStatus::BadRequest,
                ApiResponse::failure("Invalid request payload", e.to_string()),
            ),
        }
    }

    /// Validate, map onto the ledger shape and submit `CreateCollectionEvent`.
    ///
    /// On success the envelope echoes the inbound request, roles included.
    pub async fn create_collection_event(
        &self,
        request: CollectionEventRequest,
    ) -> GatewayResponse<CollectionEventRequest> {
        match self.submit_create(&request).await {
            Ok(()) => GatewayResponse::new(
                ResponseStatus::Ok,
                ApiResponse::ok("Collection event created successfully on blockchain", request),
            ),
            Err(GatewayError::ValidationError(e)) => GatewayResponse::new(
                ResponseStatus::BadRequest,
                ApiResponse::failure("Invalid request payload", e),
            ),
            Err(GatewayError::SerializationError(e)) => GatewayResponse::new(
                ResponseStatus::InternalServerError,
                ApiResponse::failure("Failed to marshal event data", e.to_string()),
            ),
            Err(GatewayError::LedgerError(e)) => GatewayResponse::new(
                ResponseStatus::InternalServerError,
                ApiResponse::failure("Failed to execute smart contract transaction", e.to_string()),
            ),
        }
    }

    /// Evaluate `GetAllBlockchainEvents` and wrap the records in the envelope
    pub async fn get_all_blockchain_events(&self) -> GatewayResponse<Vec<CollectionEvent>> {
        match self.query_all().await {
            Ok(events) => GatewayResponse::new(
                ResponseStatus::Ok,
                ApiResponse::ok("Retrieved all blockchain events successfully", events),
            ),
            Err(GatewayError::LedgerError(e)) => GatewayResponse::new(
                ResponseStatus::InternalServerError,
                ApiResponse::failure("Failed to query blockchain", e.to_string()),
            ),
            Err(e) => GatewayResponse::new(
                ResponseStatus::InternalServerError,
                ApiResponse::failure("Failed to parse blockchain response", e.to_string()),
            ),
        }
    }

    async fn submit_create(&self, request: &CollectionEventRequest) -> GatewayResult<()> {
        request
            .validate()
            .map_err(|e| GatewayError::ValidationError(e.to_string()))?;

        tracing::debug!(
            batch_id = %request.batch_id(),
            from_role = %request.from_role,
            to_role = %request.to_role,
            "handoff roles are not persisted"
        );
        let record = request.clone().into_ledger_record();
        let event_json = serde_json::to_string(&record)?;

        let invocation = InvocationRequest::new(
            CREATE_COLLECTION_EVENT,
            vec![record.batch_id.clone(), event_json],
        );
        self.invoker.submit(&invocation).await?;
        Ok(())
    }

    async fn query_all(&self) -> GatewayResult<Vec<CollectionEvent>> {
        let invocation = InvocationRequest::new(GET_ALL_BLOCKCHAIN_EVENTS, Vec::new());
        let output = self.invoker.evaluate(&invocation).await?;

        let trimmed = String::from_utf8_lossy(&output);
        let trimmed = trimmed.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }
        // Some runtimes answer `null` for an empty listing
        let events: Option<Vec<CollectionEvent>> = serde_json::from_str(trimmed)?;
        Ok(events.unwrap_or_default())
    }
}
