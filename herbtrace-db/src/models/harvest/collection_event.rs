use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::keyed::Keyed;

use super::environmental_conditions::EnvironmentalConditions;
use super::farming_inputs::FarmingInputs;
use super::lat_long::LatLong;
use super::null_default::null_as_default;
use super::permit_compliance::PermitCompliance;

/// Ledger-resident record of a harvest collection.
///
/// Filed in world state under `batch_id`; the value is the canonical JSON encoding
/// produced by [`CollectionEvent::to_ledger_bytes`]. Write-once: nothing updates or
/// deletes a committed record.
///
/// Decoding is strict about required fields: a payload missing `batch_id`, `actor_id`,
/// `crop_id`, `location` or either date fails instead of decoding to empty values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CollectionEvent {
    /// Primary key, unique across the ledger
    #[validate(length(min = 1, message = "batch_id is required"))]
    pub batch_id: String,

    #[validate(length(min = 1, message = "actor_id is required"))]
    pub actor_id: String,

    #[validate(length(min = 1, message = "crop_id is required"))]
    pub crop_id: String,

    #[validate(nested)]
    pub location: LatLong,

    /// Harvest window. No ordering between the two dates is enforced.
    pub start_date: DateTime<Utc>,
    pub harvest_date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentalConditions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<FarmingInputs>,

    /// Insertion order is preserved and carries no further meaning. `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    #[validate(nested)]
    pub permits: Vec<PermitCompliance>,
}

impl CollectionEvent {
    /// Decode a record from a JSON payload or from stored ledger bytes.
    pub fn from_ledger_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Canonical encoding written to world state.
    ///
    /// Field order follows the struct declaration and optional fields are omitted,
    /// so equal records always encode to identical bytes.
    pub fn to_ledger_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

impl Keyed for CollectionEvent {
    fn ledger_key(&self) -> &str {
        &self.batch_id
    }
}
