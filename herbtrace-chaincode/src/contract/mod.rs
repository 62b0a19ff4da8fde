pub mod collection_event_contract;

pub use collection_event_contract::CollectionEventContract;
