pub mod in_process_invoker;
pub mod collection_event_gateway;

pub use in_process_invoker::InProcessInvoker;
pub use collection_event_gateway::CollectionEventGateway;
