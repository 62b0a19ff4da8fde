use serde::{Deserialize, Serialize};

/// String-argument invocation of a chaincode function.
///
/// Two encodings are accepted:
/// * `{"function": "ReadCollectionEvent", "Args": ["BATCH-001"]}`
/// * `{"Args": ["ReadCollectionEvent", "BATCH-001"]}` (command-line form, first arg names the function)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(rename = "Args", default)]
    pub args: Vec<String>,
}

impl InvocationRequest {
    /// Build a request in the command-line form.
    pub fn new(function: impl Into<String>, args: Vec<String>) -> Self {
        let mut all = Vec::with_capacity(args.len() + 1);
        all.push(function.into());
        all.extend(args);
        Self {
            function: None,
            args: all,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Encode the envelope. Nested JSON arguments are escaped by the encoder.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Split into the function name and its parameters.
    ///
    /// Returns `None` when no function name is present.
    pub fn split(&self) -> Option<(&str, &[String])> {
        match &self.function {
            Some(function) => Some((function.as_str(), self.args.as_slice())),
            None => self
                .args
                .split_first()
                .map(|(function, params)| (function.as_str(), params)),
        }
    }
}

/// Standard response envelope relayed back to gateway clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    Ok,
    BadRequest,
    InternalServerError,
}

impl ResponseStatus {
    /// HTTP status code of this outcome
    pub fn code(&self) -> u16 {
        match self {
            ResponseStatus::Ok => 200,
            ResponseStatus::BadRequest => 400,
            ResponseStatus::InternalServerError => 500,
        }
    }
}

/// Envelope plus the status the front door should answer with.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse<T> {
    pub status: ResponseStatus,
    pub body: ApiResponse<T>,
}

impl<T> GatewayResponse<T> {
    pub fn new(status: ResponseStatus, body: ApiResponse<T>) -> Self {
        Self { status, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_form_splits_function_from_args() {
        let request = InvocationRequest::new(
            "CreateCollectionEvent",
            vec!["BATCH-001".to_string(), r#"{"batch_id":"BATCH-001"}"#.to_string()],
        );

        let (function, params) = request.split().unwrap();
        assert_eq!(function, "CreateCollectionEvent");
        assert_eq!(params.len(), 2);
        assert_eq!(params[0], "BATCH-001");
    }

    #[test]
    fn test_nested_payload_survives_envelope_encoding() {
        let payload = r#"{"batch_id":"BATCH-001","crop_id":"turmeric"}"#;
        let request = InvocationRequest::new(
            "CreateCollectionEvent",
            vec!["BATCH-001".to_string(), payload.to_string()],
        );

        let encoded = request.to_json().unwrap();
        assert!(encoded.starts_with(r#"{"Args":["CreateCollectionEvent","BATCH-001","{\"batch_id\""#));

        let decoded = InvocationRequest::from_json(&encoded).unwrap();
        assert_eq!(decoded, request);
        assert_eq!(decoded.split().unwrap().1[1], payload);
    }

    #[test]
    fn test_explicit_function_field() {
        let decoded =
            InvocationRequest::from_json(r#"{"function":"GetAllBlockchainEvents","Args":[]}"#).unwrap();

        let (function, params) = decoded.split().unwrap();
        assert_eq!(function, "GetAllBlockchainEvents");
        assert!(params.is_empty());
    }

    #[test]
    fn test_empty_envelope_has_no_function() {
        let decoded = InvocationRequest::from_json(r#"{"Args":[]}"#).unwrap();
        assert!(decoded.split().is_none());
    }

    #[test]
    fn test_envelope_omits_absent_fields() {
        let ok = ApiResponse::ok("done", vec![1, 2]);
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"success":true,"message":"done","data":[1,2]}"#
        );

        let failed: ApiResponse<Vec<u8>> = ApiResponse::failure("Invalid request payload", "boom");
        assert_eq!(
            serde_json::to_string(&failed).unwrap(),
            r#"{"success":false,"message":"Invalid request payload","error":"boom"}"#
        );
    }
}
