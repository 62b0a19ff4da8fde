use serde::{Deserialize, Serialize};

/// Conditions observed at the collection site.
///
/// Every field is optional. Absent fields are omitted from the ledger encoding
/// rather than written as zero values, so "not measured" never reads back as `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_quality: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moisture: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_conditions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irrigation_method: Option<String>,
}
