pub mod memory_world_state;
pub mod memory_transaction;
pub mod memory_iterator;

pub use memory_world_state::MemoryWorldState;
pub use memory_transaction::MemoryTransactionContext;
pub use memory_iterator::MemoryStateIterator;
