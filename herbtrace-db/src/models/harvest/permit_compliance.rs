use serde::{Deserialize, Serialize};
use validator::Validate;

/// A permit held by the recording party at collection time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PermitCompliance {
    #[validate(length(min = 1, message = "permit_id is required"))]
    pub permit_id: String,
    pub permit_type: String,
    pub issuer: String,

    /// Kept as the caller's string; no date parsing is applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}
