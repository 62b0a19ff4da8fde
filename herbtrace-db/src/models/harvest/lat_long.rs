use serde::{Deserialize, Serialize};
use validator::Validate;

/// Geographical coordinates of a collection site (decimal degrees)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LatLong {
    #[validate(range(min = -90.0, max = 90.0, message = "lat must be within [-90, 90]"))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "long must be within [-180, 180]"))]
    pub long: f64,

    /// Free-text address, omitted from the encoding when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl LatLong {
    pub fn new(lat: f64, long: f64) -> Self {
        Self {
            lat,
            long,
            address: None,
        }
    }
}
