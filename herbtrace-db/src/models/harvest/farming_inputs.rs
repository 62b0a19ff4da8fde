use serde::{Deserialize, Serialize};

use super::null_default::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FarmingInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fertilizers: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pesticides_used: Option<String>,

    /// Always encoded; `false` when the payload leaves it out or sends `null`
    #[serde(default, deserialize_with = "null_as_default")]
    pub organic_certified: bool,
}
