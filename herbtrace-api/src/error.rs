use thiserror::Error;

/// Failures returned by the ledger contract to its caller.
///
/// Every variant leaves ledger state unchanged; the host runtime only commits the
/// write set of an invocation that returned `Ok`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("collection event with batchID {0} already exists")]
    DuplicateKey(String),

    #[error("batchID mismatch between arg ({argument}) and JSON payload ({payload})")]
    KeyMismatch { argument: String, payload: String },

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("collection event {0} does not exist")]
    NotFound(String),

    #[error("state store error: {0}")]
    Store(String),

    #[error("unknown chaincode function: {0}")]
    UnknownFunction(String),

    #[error("invalid arguments for {function}: expected {expected}, got {actual}")]
    InvalidArguments {
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error("MVCC read conflict on key {0}")]
    MvccConflict(String),
}

pub type ContractResult<T> = Result<T, ContractError>;

/// Failures surfaced by the request gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Ledger error: {0}")]
    LedgerError(#[from] ContractError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type GatewayResult<T> = Result<T, GatewayError>;
