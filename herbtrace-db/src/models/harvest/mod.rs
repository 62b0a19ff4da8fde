pub mod collection_event;
pub mod collection_event_request;
pub mod environmental_conditions;
pub mod farming_inputs;
pub mod lat_long;
mod null_default;
pub mod permit_compliance;

pub use collection_event::CollectionEvent;
pub use collection_event_request::CollectionEventRequest;
pub use environmental_conditions::EnvironmentalConditions;
pub use farming_inputs::FarmingInputs;
pub use lat_long::LatLong;
pub use permit_compliance::PermitCompliance;
